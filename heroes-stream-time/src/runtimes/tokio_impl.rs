// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod tokio_implementation {
    use crate::timer::Timer;
    use std::time::Duration;
    use tokio::time::{sleep, Sleep};

    /// Timer backed by tokio's clock, so `tokio::time::pause` and `advance`
    /// drive it in tests.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TokioTimer;

    impl Timer for TokioTimer {
        type Sleep = Sleep;

        fn sleep_future(&self, duration: Duration) -> Self::Sleep {
            sleep(duration)
        }
    }
}
