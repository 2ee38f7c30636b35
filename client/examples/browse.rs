use anyhow::Result;
use futures_util::StreamExt;
use pokedex_client::{ClientConfig, DetailLoader, PagingConfig, PokemonRepository};
use tracing_subscriber::{EnvFilter, fmt};

const PAGES: usize = 3;
const STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ClientConfig::from_env();
    let repository = PokemonRepository::from_config(config, PagingConfig::default())?;

    let mut pages = Box::pin(repository.pokemon_stream().into_stream());
    let mut first_id = None;
    for _ in 0..PAGES {
        let page = match pages.next().await {
            Some(Ok(page)) => page,
            Some(Err(err)) if err.is_not_found() => {
                println!("List endpoint not found: {}", err);
                break;
            }
            Some(Err(err)) => return Err(err.into()),
            None => break,
        };

        println!("\n=== Page (next: {:?}) ===", page.next_key);
        for pokemon in &page.items {
            first_id.get_or_insert(pokemon.id);
            println!("#{:<4} {:<16} {}", pokemon.id, pokemon.name, pokemon.image_url);
        }
    }

    let Some(id) = first_id else {
        println!("No Pokemon returned");
        return Ok(());
    };

    let mut loader = DetailLoader::new(repository);
    loader.load(id);
    loader.wait().await;

    let state = loader.state();
    if let Some(error) = state.error {
        println!("\n{}", error);
        return Ok(());
    }

    if let Some(profile) = state.profile {
        let detail = &profile.detail;
        let genus = profile.species.genus("en").unwrap_or("unknown");

        println!("\n=== {} ===", detail.name);
        println!("Types: {}", detail.type_names().join(", "));
        println!("Genus: {}", genus);
        println!("Sprite: {}", detail.sprites.best().unwrap_or("none"));
        for stat in STATS {
            if let Some(value) = detail.base_stat(stat) {
                println!("  {:<16} {}", stat, value);
            }
        }
        println!("  {:<16} {}", "total", detail.base_stat_total());
        for mv in detail.moves.iter().take(10) {
            println!("  {:<20} {}", mv.name, mv.learn_method_description);
        }
    }

    Ok(())
}
