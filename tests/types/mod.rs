mod language;
mod stack;
mod validation_error;
