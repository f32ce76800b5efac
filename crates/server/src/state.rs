use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chess_render::GallerySession;

/// Browse cursors keyed by client-supplied session id. Cursors live only in
/// process memory and reset on restart; sessions never observe each other.
pub type Sessions = Arc<RwLock<HashMap<String, GallerySession>>>;

pub const DEFAULT_SESSION: &str = "default";

pub fn new_sessions() -> Sessions {
    Arc::new(RwLock::new(HashMap::new()))
}
