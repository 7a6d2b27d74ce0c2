use clap::{Args, Parser, Subcommand};

use meshidoko_core::{SearchCriteria, SortMode};
use meshidoko_openai::OpenAiClient;
use meshidoko_places::PlacesClient;
use meshidoko_recommend::{RecommendationSource, Recommender};

#[derive(Debug, Parser)]
#[command(name = "meshidoko-cli")]
#[command(about = "meshidoko command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one restaurant search and print the ranked suggestions.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Station or neighborhood name to search around.
    #[arg(long)]
    area: String,

    /// Budget per person, in yen.
    #[arg(long, default_value_t = 5000)]
    budget: u32,

    #[arg(long, default_value_t = 2)]
    party_size: u32,

    /// Desired genre; repeat the flag for an OR search.
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Sort order: distance, rating, or genre.
    #[arg(long, default_value = "distance")]
    sort: String,

    #[arg(long, default_value = "")]
    date: String,

    #[arg(long, default_value = "")]
    time: String,

    #[arg(long)]
    purpose: Option<String>,

    #[arg(long)]
    requirements: Option<String>,

    /// Print the raw JSON response instead of a summary.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(args).await,
    }
}

async fn run_search(args: SearchArgs) -> anyhow::Result<()> {
    let config = meshidoko_core::load_app_config()?;
    let places = PlacesClient::new(
        &config.google_places_api_key,
        config.request_timeout_secs,
    )?;
    let openai = config
        .openai_api_key
        .as_deref()
        .map(|key| OpenAiClient::new(key, config.request_timeout_secs))
        .transpose()?;
    let recommender = Recommender::new(places, openai);

    let criteria = SearchCriteria {
        date: args.date,
        time: args.time,
        party_size: args.party_size,
        area: args.area,
        budget: args.budget,
        purpose: args.purpose,
        genres: args.genres,
        requirements: args.requirements,
        sort_mode: SortMode::parse(&args.sort),
    };

    let outcome = recommender.recommend(&criteria).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.source == RecommendationSource::Fallback {
        println!("(provider unavailable; showing sample suggestions)");
    }
    for (index, restaurant) in outcome.restaurants.iter().enumerate() {
        println!("{}. {} [{}]", index + 1, restaurant.name, restaurant.genre);
        println!("   {}", restaurant.access);
        println!("   予算目安: {}円 / 人", restaurant.budget);
        if !restaurant.features.is_empty() {
            println!("   特徴: {}", restaurant.features.join("、"));
        }
        println!("   {}", restaurant.reason);
    }
    Ok(())
}
