pub mod clicks;
pub mod constants;
pub mod notice;
pub mod panel;
pub mod particles;
pub mod speech;
pub mod stage;

pub use clicks::*;
pub use notice::*;
pub use panel::*;
pub use particles::*;
pub use speech::*;
pub use stage::*;
