use clap::Args;
use folio_solver::io::Portfolio;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Every subcommand that consumes a constraint table reads it from a file or stdin
// and writes its result to a file or stdout.
#[derive(Args)]
pub struct IOArgs {
    /// The constraint table JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    /// Read and validate the constraint table. A single invalid row rejects the table.
    pub fn portfolio(&self) -> anyhow::Result<Portfolio> {
        let portfolio = match &self.input {
            PathOrStd::Path(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
            PathOrStd::Std => serde_json::from_reader(stdin().lock())?,
        };
        Ok(portfolio)
    }

    pub fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }

    pub fn extension(&self) -> Option<&str> {
        match &self.output {
            PathOrStd::Path(path) => path.extension(),
            PathOrStd::Std => None,
        }
        .and_then(|ext| ext.to_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
