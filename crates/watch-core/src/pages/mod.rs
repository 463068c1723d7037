pub mod battery;
pub mod chrome;
pub mod constants;
pub mod heart;
pub mod page;
pub mod renderer;
pub mod time;

pub use battery::BatteryPage;
pub use heart::HeartPage;
pub use page::{Page, PageWrapper};
pub use renderer::WatchRenderer;
pub use time::TimePage;
