// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// armdist - Chromosome-arm partitioned pairwise gene distance calculator
pub struct Args {
    /// path to feature table (.csv or .tsv)
    #[argh(option)]
    pub features: Option<String>,

    /// output directory for partition files (one file per chromosome arm)
    #[argh(option)]
    pub output_dir: Option<String>,

    /// output format: csv, tsv (default: csv)
    #[argh(option, default = "String::from(\"csv\")")]
    pub format: String,

    /// include only chromosomes matching regex pattern
    #[argh(option)]
    pub include_chromosomes: Option<String>,

    /// exclude chromosomes matching regex pattern
    #[argh(option)]
    pub exclude_chromosomes: Option<String>,

    /// skip chromosomes without exactly one centromere instead of aborting
    #[argh(switch)]
    pub skip_invalid_chromosomes: bool,

    /// drop self-pairs (A,A) from the output (kept by default)
    #[argh(switch)]
    pub drop_self_pairs: bool,

    /// CSV log of chromosomes skipped under --skip-invalid-chromosomes
    #[argh(option)]
    pub report_log: Option<String>,

    /// write machine-readable run summary to a JSON file
    #[argh(option)]
    pub summary_json: Option<String>,

    /// show feature table statistics only, then exit
    #[argh(switch)]
    pub stats_only: bool,

    /// validate inputs without writing output (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
