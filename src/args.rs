use std::path::PathBuf;

use super::error::Error;

/// Name shown in the usage line when argv[0] is missing
const DEFAULT_PROGRAM: &str = "bmphd";

pub struct Args {
    pub path: PathBuf,
}

impl Args {
    /// Expects the program name followed by exactly one path
    pub fn from_env_args<I: IntoIterator<Item = String>>(env_args: I) -> Result<Args, Error> {
        let mut env_args = env_args.into_iter();

        let program = env_args.next().unwrap_or_else(|| String::from(DEFAULT_PROGRAM));
        let rest: Vec<String> = env_args.collect();

        match rest.len() {
            1 => {
                debug!("input = {}", rest[0]);
                Ok(Args { path: PathBuf::from(&rest[0]) })
            },
            n => {
                debug!("expected 1 argument, got {}", n);
                Err(Error::usage(&program))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::error::ErrorKind;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn takes_one_path() {
        let args = Args::from_env_args(strings(&["bmphd", "image.bmp"])).unwrap();
        assert_eq!(args.path, PathBuf::from("image.bmp"));
    }

    #[test]
    fn wrong_argument_count_is_a_usage_error() {
        for argv in &[vec!["./bmphd"], vec!["./bmphd", "a.bmp", "b.bmp"]] {
            let err = Args::from_env_args(strings(argv)).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::Usage);
            assert_eq!(err.to_string(), "Use: ./bmphd <filename.bmp>");
        }
    }

    #[test]
    fn missing_program_name_falls_back() {
        let err = Args::from_env_args(Vec::new()).err().unwrap();
        assert_eq!(err.to_string(), "Use: bmphd <filename.bmp>");
    }
}
