use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

const JOB_PATTERN: &str = r"^(?P<path>.+?)(?::(?P<min>\d+)-(?P<max>\d+))?$";

fn job_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(JOB_PATTERN).unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub path: PathBuf,
    pub range: Option<(usize, usize)>,
}

impl Job {
    pub fn range_or(&self, default: (usize, usize)) -> (usize, usize) {
        self.range.unwrap_or(default)
    }
}

impl FromStr for Job {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = job_regex()
            .captures(s)
            .ok_or_else(|| format!("expected PATH or PATH:MIN-MAX, got {:?}", s))?;

        let range = match (caps.name("min"), caps.name("max")) {
            (Some(min), Some(max)) => {
                let min = min.as_str().parse::<usize>().map_err(|e| e.to_string())?;
                let max = max.as_str().parse::<usize>().map_err(|e| e.to_string())?;
                Some((min, max))
            }
            _ => None,
        };

        Ok(Job {
            path: PathBuf::from(&caps["path"]),
            range,
        })
    }
}
