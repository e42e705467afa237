//! The widget controller: owns the snapshot and unit flag, drives the
//! render sink through the Loading/Error/Loaded lifecycle.

use skycast_core::OpState;
use skycast_weather::{
    Coordinates, DisplayUnit, LocationSource, WeatherProvider, WeatherSnapshot,
};

use crate::view::{RenderSink, ViewModel, ViewState};

pub struct WeatherWidget<L: LocationSource> {
    locator: L,
    provider: WeatherProvider,
    snapshot: Option<WeatherSnapshot>,
    unit: DisplayUnit,
    op: OpState,
}

impl<L: LocationSource> WeatherWidget<L> {
    pub fn new(locator: L, provider: WeatherProvider) -> Self {
        Self {
            locator,
            provider,
            snapshot: None,
            unit: DisplayUnit::default(),
            op: OpState::default(),
        }
    }

    /// Resolve the current position and replace the snapshot and view.
    ///
    /// On geolocation denial or fetch failure the sink gets an `Error`
    /// view and the prior snapshot is left untouched. A refresh requested
    /// while one is in flight is ignored.
    pub async fn refresh<R: RenderSink>(&mut self, sink: &mut R) {
        if !self.op.can_start_refresh() {
            tracing::debug!("Refresh already in flight, ignoring");
            return;
        }
        self.op = OpState::Busy;

        sink.render(&ViewState::Loading);

        match self.locator.current().await {
            Ok(coords) => self.fetch_and_render(coords, sink).await,
            Err(e) => {
                tracing::error!("Geolocation failed: {}", e);
                sink.render(&ViewState::Error(e.user_message().to_string()));
            }
        }

        self.op = self.op.on_refresh_done();
    }

    async fn fetch_and_render<R: RenderSink>(&mut self, coords: Coordinates, sink: &mut R) {
        match self.provider.current(&coords).await {
            Ok(snapshot) => {
                let view = ViewModel::from_snapshot(&snapshot, self.unit);
                self.snapshot = Some(snapshot);
                sink.render(&ViewState::Loaded(view));
            }
            Err(e) => {
                tracing::error!("Weather fetch failed: {}", e);
                sink.render(&ViewState::Error(e.user_message().to_string()));
            }
        }
    }

    /// Flip the display unit and re-render only the temperature field and
    /// the toggle label. The unit flip sticks even without a snapshot.
    pub fn toggle_unit<R: RenderSink>(&mut self, sink: &mut R) {
        self.unit = self.unit.toggled();

        let temperature = self
            .snapshot
            .as_ref()
            .map(|s| self.unit.format_temp(s.temp_c));
        sink.render_temperature(temperature.as_deref(), self.unit.toggle_label());
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }
}
