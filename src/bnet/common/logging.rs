use colored::Colorize;

#[macro_export]
macro_rules! print_section {
    ($($arg:tt)*) => {
        $crate::bnet::common::logging::section(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! print_estimate {
    ($label:expr, $value:expr) => {
        $crate::bnet::common::logging::estimate(&$label, $value)
    };
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::bnet::common::logging::warning(&format!($($arg)*))
    };
}

pub fn section(text: &str) {
    println!("\n{}", text.blue().bold());
}

pub fn estimate(label: &str, probability: f64) {
    println!("{} = {}", label, format!("{:.5}", probability).green());
}

pub fn warning(text: &str) {
    println!("{}", text.yellow());
}
