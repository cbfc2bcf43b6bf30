use console::style;
use decomment_core::{StripError, usage};

pub fn print_usage(program: &str) {
    println!("{}", usage(program));
}

pub fn print_failure(err: &StripError) {
    println!("{}", style(err).red());
}
