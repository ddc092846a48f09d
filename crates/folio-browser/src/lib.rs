//! Browser side of the portfolio: everything that needs `window`.

pub mod canvas;
pub mod listener;
pub mod media;
pub mod network_canvas;
pub mod render_loop;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod timer;
pub mod transport;

pub use folio;
pub use zoon;
