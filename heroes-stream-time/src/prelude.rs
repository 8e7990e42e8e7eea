// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the time-based operators.

pub use crate::debounce::{DebounceExt, DebounceWithDefaultTimerExt};
pub use crate::timer::Timer;
