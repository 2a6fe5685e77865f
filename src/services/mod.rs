// Groove services
// Services provide stateless or self-contained functionality: URL resolution,
// settings, the shield simulation, the loading flag and the content frame boundary.

pub mod content_frame;
pub mod loading_indicator;
pub mod privacy_shield;
pub mod settings_engine;
pub mod url_resolver;
