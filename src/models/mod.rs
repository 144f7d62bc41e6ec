pub mod coordinates;
pub mod media;
pub mod place;
pub mod traffic;
pub mod weather;

pub use coordinates::Coordinates;
pub use media::{fallback_images, ImageItem, ImageResponse, VideoItem, VideoResponse};
pub use place::{FoodResponse, PlaceResult};
pub use traffic::TrafficSnapshot;
pub use weather::WeatherSnapshot;
