use log::{error, warn};
use std::fmt::Debug;

pub trait ResultExt<T> {
    fn ok_or_warn(self, what: &str) -> Option<T>;
    fn log_if_error(self, what: &str);
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
    fn ok_or_warn(self, what: &str) -> Option<T> {
        self.inspect_err(|err| warn!("{what}: {err:?}")).ok()
    }

    fn log_if_error(self, what: &str) {
        if let Err(err) = self {
            error!("{what}: {err:?}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_or_warn_keeps_value() {
        let result: Result<u32, &str> = Ok(7);
        assert_eq!(result.ok_or_warn("unexpected"), Some(7));
    }

    #[test]
    fn ok_or_warn_swallows_error() {
        let result: Result<u32, &str> = Err("boom");
        assert_eq!(result.ok_or_warn("expected"), None);
    }
}
