pub mod balloons;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod effect;
pub mod engine;
pub mod flame;
pub mod flow;
pub mod gesture;
pub mod interaction;
pub mod press;
pub mod reveal;
pub mod snapshot;

pub use balloons::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use effect::*;
pub use engine::*;
pub use flame::*;
pub use flow::*;
pub use gesture::*;
pub use interaction::*;
pub use press::*;
pub use reveal::*;
pub use snapshot::*;
