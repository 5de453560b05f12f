// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod dialog;
pub mod model;
pub mod projection;
pub mod state;
pub mod store;

pub use dialog::*;
pub use model::*;
pub use projection::*;
pub use state::*;
pub use store::*;
