//! Argument parsing and command execution for the `topogen` binary.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::{
    algo::Connectivity,
    error::TopologyError,
    gens::{Strategy, TopologyGenerator},
    io::{DotColor, DotWriter, GraphWrite, GraphWriter},
    prelude::*,
};

const DEFAULT_TREE_SWITCHES: NumNodes = 10;
const DEFAULT_JELLYFISH_SWITCHES: NumNodes = 7;
const DEFAULT_JELLYFISH_DEGREE: NumNodes = 3;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "topogen",
    about = "Generate random switch topologies for emulated network testbeds."
)]
pub struct Cli {
    /// Seed of the random source; equal seeds yield equal topologies.
    #[arg(long, global = true, default_value_t = 0)]
    pub seed: u64,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::EdgeList)]
    pub format: OutputFormat,

    /// Write the topology to this file instead of stdout.
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Topology model to generate.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported topology models.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Random spanning tree over the switches.
    Tree(TreeArgs),
    /// Jellyfish random regular graph.
    Jellyfish(JellyfishArgs),
}

/// Options accepted by the `tree` command.
#[derive(Debug, Args, Clone)]
pub struct TreeArgs {
    /// Number of switches.
    #[arg(long, short = 'n', default_value_t = DEFAULT_TREE_SWITCHES)]
    pub switches: NumNodes,
}

/// Options accepted by the `jellyfish` command.
#[derive(Debug, Args, Clone)]
pub struct JellyfishArgs {
    /// Number of switches.
    #[arg(long, short = 'n', default_value_t = DEFAULT_JELLYFISH_SWITCHES)]
    pub switches: NumNodes,

    /// Number of links per switch.
    #[arg(long, short = 'k', default_value_t = DEFAULT_JELLYFISH_DEGREE)]
    pub degree: NumNodes,
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header line followed by one `a b` line per link.
    EdgeList,
    /// GraphViz DOT.
    Dot,
    /// JSON object with switches and links.
    Json,
}

impl From<OutputFormat> for crate::io::FileFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::EdgeList => Self::EdgeList,
            OutputFormat::Dot => Self::Dot,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation was rejected or could not complete.
    #[error(transparent)]
    Topology(#[from] TopologyError),
    /// Writing the topology failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Key figures of a generated topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologySummary {
    /// Name of the generating model
    pub model: &'static str,
    /// Seed the random source was initialised with
    pub seed: u64,
    /// Number of switches
    pub switches: NumNodes,
    /// Number of links
    pub links: NumEdges,
    /// Number of connected components
    pub components: usize,
    /// `(degree, #switches)` sorted by degree
    pub degree_distribution: Vec<(NumNodes, NumNodes)>,
}

impl TopologySummary {
    /// Collects the summary of `topology`
    pub fn new(model: &'static str, seed: u64, topology: &Topology) -> Self {
        Self {
            model,
            seed,
            switches: topology.number_of_nodes(),
            links: topology.number_of_edges(),
            components: topology.connected_components().count(),
            degree_distribution: topology.degree_distribution(),
        }
    }

    /// Returns *true* if every switch can reach every other switch
    pub fn is_connected(&self) -> bool {
        self.components <= 1
    }
}

impl Cli {
    /// Returns the generator selected by the subcommand
    pub fn strategy(&self) -> Strategy {
        match &self.command {
            Command::Tree(args) => Strategy::random_tree(args.switches),
            Command::Jellyfish(args) => Strategy::jellyfish(args.switches, args.degree),
        }
    }
}

/// Generates the topology selected by `cli` from a random source seeded with `cli.seed`.
///
/// # Errors
/// Returns [`CliError::Topology`] if the parameters are invalid or generation is exhausted.
#[instrument(name = "cli.generate", err, skip(cli), fields(model = field::Empty, seed = cli.seed))]
pub fn generate(cli: &Cli) -> Result<(Topology, TopologySummary), CliError> {
    let strategy = cli.strategy();
    Span::current().record("model", field::display(strategy.name()));

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let topology: Topology = strategy.generate(&mut rng)?;
    let summary = TopologySummary::new(strategy.name(), cli.seed, &topology);

    info!(
        switches = summary.switches,
        links = summary.links,
        connected = summary.is_connected(),
        degrees = ?summary.degree_distribution,
        "topology generated"
    );
    Ok((topology, summary))
}

/// Executes the command represented by `cli`.
///
/// The topology is written to `cli.output` if set, and to `stdout` otherwise.
///
/// # Errors
/// Returns [`CliError`] when generation or writing fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use topogen::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["topogen", "jellyfish", "--switches", "10", "--degree", "3"]);
/// let mut out = Vec::new();
/// let summary = run_cli(&cli, &mut out).unwrap();
///
/// assert_eq!(summary.links, 15);
/// assert!(String::from_utf8(out).unwrap().starts_with("p topo 10 15\n"));
/// ```
pub fn run_cli<W: Write>(cli: &Cli, stdout: W) -> Result<TopologySummary, CliError> {
    let (topology, summary) = generate(cli)?;

    match &cli.output {
        Some(path) => {
            let io_error = |source| CliError::Io {
                path: path.clone(),
                source,
            };
            let writer = BufWriter::new(File::create(path).map_err(io_error)?);
            write_topology(cli, &topology, writer).map_err(io_error)?;
        }
        None => {
            write_topology(cli, &topology, BufWriter::new(stdout)).map_err(|source| {
                CliError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
        }
    }

    Ok(summary)
}

/// Writes `topology` in the format selected by `cli`.
/// In DOT output, Jellyfish switches left short of the target degree are highlighted.
fn write_topology<W: Write>(cli: &Cli, topology: &Topology, mut writer: W) -> io::Result<()> {
    match (cli.format, cli.strategy()) {
        (OutputFormat::Dot, Strategy::Jellyfish(jelly)) => {
            let short = topology
                .vertices()
                .filter(|&u| topology.degree_of(u) < jelly.target_degree());
            DotWriter::new()
                .highlight(short, DotColor::Red)
                .try_write_graph(topology, &mut writer)?;
        }
        (format, _) => topology.try_write_to_writer(&mut writer, format.into())?,
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{error::ErrorKind, io::EdgeListRead};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("topogen").chain(args.iter().copied()))
            .expect("arguments must parse")
    }

    #[test]
    fn defaults_follow_testbed() {
        let cli = parse(&["tree"]);
        assert_eq!(cli.seed, 0);
        assert_eq!(cli.format, OutputFormat::EdgeList);
        assert!(cli.output.is_none());
        assert_eq!(cli.strategy(), Strategy::random_tree(10));

        let cli = parse(&["jellyfish"]);
        assert_eq!(cli.strategy(), Strategy::jellyfish(7, 3));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["jellyfish", "-n", "12", "-k", "4", "--seed", "9", "--format", "json"]);
        assert_eq!(cli.seed, 9);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.strategy(), Strategy::jellyfish(12, 4));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["topogen", "--format", "metis", "tree"]).is_err());
    }

    #[test]
    fn tree_summary() {
        let mut out = Vec::new();
        let summary = run_cli(&parse(&["tree", "--switches", "16"]), &mut out).unwrap();

        assert_eq!(summary.model, "random-tree");
        assert_eq!(summary.switches, 16);
        assert_eq!(summary.links, 15);
        assert!(summary.is_connected());

        let topology = Topology::try_read_edge_list(out.as_slice()).unwrap();
        assert_eq!(topology.number_of_edges(), 15);
    }

    #[test]
    fn seed_determines_output() {
        let run = |seed: &str| {
            let mut out = Vec::new();
            run_cli(&parse(&["--seed", seed, "jellyfish", "-n", "30", "-k", "4"]), &mut out)
                .unwrap();
            out
        };

        assert_eq!(run("3"), run("3"));
        assert_ne!(run("3"), run("4"));
    }

    #[rstest]
    #[case(&["tree", "--switches", "1"])]
    #[case(&["jellyfish", "--switches", "5", "--degree", "5"])]
    #[case(&["jellyfish", "--degree", "0"])]
    fn invalid_parameters_write_nothing(#[case] args: &[&str]) {
        let mut out = Vec::new();
        let err = run_cli(&parse(args), &mut out).unwrap_err();

        match err {
            CliError::Topology(err) => assert_eq!(err.kind(), ErrorKind::Configuration),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn writes_to_output_file() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let path = dir.path().join("topo.dot");
        let path_arg = path.to_str().expect("temp path is valid UTF-8");

        let mut out = Vec::new();
        run_cli(&parse(&["--format", "dot", "-o", path_arg, "tree"]), &mut out).unwrap();

        assert!(out.is_empty());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("graph {\n"));
        assert_eq!(written.matches("--").count(), 9);
    }

    #[test]
    fn dot_output_highlights_short_switch() {
        let mut out = Vec::new();
        run_cli(&parse(&["--format", "dot", "jellyfish", "-n", "5", "-k", "3"]), &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches("color=red").count(), 1);

        let mut out = Vec::new();
        run_cli(&parse(&["--format", "dot", "jellyfish", "-n", "10", "-k", "3"]), &mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("color="));

        let mut out = Vec::new();
        run_cli(&parse(&["--format", "dot", "tree"]), &mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("color="));
    }

    #[test]
    fn unwritable_output_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let path = dir.path().join("missing").join("topo.txt");
        let path_arg = path.to_str().expect("temp path is valid UTF-8");

        let err = run_cli(&parse(&["-o", path_arg, "tree"]), Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Io { path: p, .. } if p == path));
    }
}
