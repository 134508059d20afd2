use std::error::Error;
use std::str::FromStr;

use crate::util::CliErr;

pub fn parse_arg_required<T: FromStr>(args: &mut impl Iterator<Item = String>, field_name: &str) -> Result<T, Box<dyn Error>> {
    match args.next() {
        Some(value) => value.parse().map_err(|_| {
            println!("Invalid argument type for `{}`", field_name);
            Box::new(CliErr("Invalid argument!")) as Box<dyn Error>
        }),
        None => {
            println!("Missing value for argument `{}`", field_name);
            Err(Box::new(CliErr("Missing arguments!")))
        }
    }
}

pub fn parse_arg_optional<T: FromStr + Clone>(args: &mut impl Iterator<Item = String>, default: T) -> T {
    args.next().map(|value| value.parse().unwrap_or_else(|_| default.clone())).unwrap_or(default)
}
