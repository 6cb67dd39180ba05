use std::io;

use anyhow::{Context, Result};
use structopt::StructOpt;

use wire_split::{dot, Adjacency, Graph, Profile};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wire-split",
    about = "Split a wiring diagram at three known edges and multiply the sizes of the two halves."
)]
struct Opt {
    /// Print the full graph in DOT format instead of solving, e.g.
    /// `wire-split --graph | dot -Tsvg -o out.svg`
    #[structopt(long)]
    graph: bool,

    /// Which input, and which three edges, to use
    #[structopt(long, default_value = "real", possible_values = &Profile::variants())]
    profile: Profile,
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::from_args();
    let path = opt.profile.input_path();

    log::debug!("profile {}, reading {}", opt.profile, path.display());

    let adj = Adjacency::from_path(&path).with_context(|| {
        format!("failed to read wiring diagram {}", path.display())
    })?;

    if opt.graph {
        let graph = Graph::full(&adj);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        dot::write_dot(&graph, &mut out)?;
    } else {
        let bridges = opt.profile.bridges();
        let product = wire_split::solve(&adj, &bridges).with_context(|| {
            format!("failed to split {} at its bridges", path.display())
        })?;
        println!("{}", product);
    }

    Ok(())
}
