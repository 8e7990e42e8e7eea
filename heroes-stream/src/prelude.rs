// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::switch_map::SwitchMapExt;
pub use crate::take_until_cancelled::TakeUntilCancelledExt;
