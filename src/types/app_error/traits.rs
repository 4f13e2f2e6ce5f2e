use super::AppError;
use std::error::Error;
use std::fmt::{self, Debug, Display};

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.err, f)
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("err", &self.err)
            .field("is_multi", &self.is_multi())
            .field("cause", &self.cause)
            .field("params", &self.params)
            .field("trans_params", &self.trans_params)
            .field("debug", &self.debug)
            .field("custom_config", &self.custom_config)
            .field("custom_builder", &self.custom_builder.is_some())
            .finish()
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.err)
    }
}
