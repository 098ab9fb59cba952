//! Engine for a draggable 3x3x3 cube puzzle: sticker state, slice turns,
//! scrambling, and the resolver that turns pointer drags into turns.

pub mod gesture;
pub mod preferences;
pub mod puzzle;
pub mod session;
pub mod util;
pub mod view;

pub use gesture::{Gesture, Grab, Twist};
pub use preferences::Preferences;
pub use puzzle::{Axis, Cube, Cubie, Direction, FaceColor, GridPos, Move, Sticker};
pub use session::{Frame, Session};
pub use view::SceneView;
