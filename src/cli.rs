use crate::git::GitLog;
use crate::histogram;
use crate::model::Year;
use crate::output::{output_json, output_summary};
use crate::render::OpenScad;
use crate::skyline::{compose, Labels, SkylineParams};
use crate::util::{display_name, non_blank, output_file_name, present, repo_label};
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "skyline")]
#[command(about = "Turn a year of git commits into a printable 3D skyline (STL)")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Year to build the skyline for (YYYY)")]
    pub year: Year,

    #[arg(long, help = "Only count commits by this author (passed to git log --author)")]
    pub author: Option<String>,

    #[arg(long, help = "Nickname engraved on the model and used in the file name")]
    pub name: Option<String>,

    #[arg(long, help = "Repository label engraved on the model [default: repository directory name]")]
    pub repo: Option<String>,

    #[arg(short = 'C', long, help = "Path to git repository")]
    pub path: Option<PathBuf>,

    #[arg(short, long, help = "Directory to write the STL file to")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Print the commit histogram as JSON instead of rendering")]
    pub json: bool,

    #[clap(flatten)]
    pub tools: Tools,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}

/// External programs the run shells out to.
#[derive(Args, Clone, Debug)]
pub struct Tools {
    #[arg(long = "git", env = "SKYLINE_GIT", default_value = "git", help = "git executable")]
    pub git: PathBuf,

    #[arg(long = "openscad", env = "SKYLINE_OPENSCAD", default_value = "openscad", help = "OpenSCAD executable")]
    pub openscad: PathBuf,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let workdir = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let author = present(self.author.as_deref());

        let commit_dates = GitLog::new(&self.tools.git, &workdir)
            .commit_dates(author)
            .context("Failed to read commit history")?;
        let histogram = histogram::build(self.year, &commit_dates);
        info!(
            year = %self.year,
            commits = histogram.total_commits(),
            busiest = histogram.max_count(),
            "histogram ready"
        );

        if self.json {
            return output_json(&histogram, author);
        }

        let who = display_name(self.name.as_deref(), author);
        let labels = Labels {
            display_name: who.unwrap_or_default().to_string(),
            repo: non_blank(self.repo.as_deref())
                .map(str::to_string)
                .or_else(|| repo_label(&workdir))
                .unwrap_or_default(),
            year: self.year,
        };

        let model = compose(&histogram, &labels, &SkylineParams::default())
            .context("Failed to compose skyline model")?;

        let output_dir = self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let stl = output_dir.join(output_file_name(who, self.year));

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Rendering {}...", stl.display()));
        pb.enable_steady_tick(Duration::from_millis(100));

        let rendered = OpenScad::new(&self.tools.openscad)
            .render(&model.to_solid(), &stl)
            .context("Failed to render skyline");
        pb.finish_and_clear();
        rendered?;

        output_summary(&histogram, &model, &stl)
    }
}
