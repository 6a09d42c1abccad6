use clap::Subcommand;
use planner::query::dialect::DialectKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Render the SQL query selecting the filtered entities
    Sql {
        #[arg(long, help = "JSON file with the entity schemas")]
        schemas: String,

        #[arg(long, help = "Schema the query is rooted at")]
        root: String,

        #[arg(
            long = "filter",
            help = "Filter as `path:operator:value`, e.g. `program.code:in:[A,B]`"
        )]
        filters: Vec<String>,

        #[arg(long, help = "SQL dialect: postgres or mysql")]
        dialect: Option<DialectKind>,
    },
    /// Filter JSON rows in memory
    Eval {
        #[arg(long, help = "JSON file with the entity schemas")]
        schemas: String,

        #[arg(long, help = "Schema the rows belong to")]
        root: String,

        #[arg(
            long = "filter",
            help = "Filter as `path:operator:value`, e.g. `status:in:[ACTIVE]`"
        )]
        filters: Vec<String>,

        #[arg(long, help = "JSON file with an array of row objects")]
        rows: String,

        #[arg(
            long,
            help = "If specified, writes the matching rows to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Check a tracker import bundle for updates to non-updatable fields
    Validate {
        #[arg(long, help = "JSON tracker bundle")]
        bundle: String,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
}
