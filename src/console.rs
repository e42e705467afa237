//! Terminal render sink: the status line and weather panel as plain text.

use skycast_widget::{RenderSink, ViewState};

#[derive(Debug, Default)]
pub struct ConsoleView;

impl RenderSink for ConsoleView {
    fn render(&mut self, view: &ViewState) {
        match view {
            ViewState::Loading => println!("Getting your location..."),
            ViewState::Error(message) => println!("{}", message),
            ViewState::Loaded(vm) => {
                println!();
                println!("  {}", vm.location);
                println!("  {}  ({})", vm.temperature, vm.description);
                println!();
                println!("  Min/Max     {}", vm.min_max);
                println!("  Humidity    {}", vm.humidity);
                println!("  Wind        {}", vm.wind);
                println!("  Clouds      {}", vm.clouds);
                println!("  Visibility  {}", vm.visibility);
                println!("  Pressure    {}", vm.pressure);
                println!("  Sunrise     {}", vm.sunrise);
                println!("  Sunset      {}", vm.sunset);
                println!();
                println!("  backdrop: {}", vm.backdrop.image_css());
            }
        }
    }

    fn render_temperature(&mut self, temperature: Option<&str>, toggle_label: &str) {
        if let Some(temperature) = temperature {
            println!("  {}", temperature);
        }
        println!("[r] refresh  [u] {}  [q] quit", toggle_label);
    }
}
