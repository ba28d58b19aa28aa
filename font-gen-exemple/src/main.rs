use font_gen_core::session::ViewerId;
use font_gen_core::session::manager::SessionManager;
use font_gen_core::session::page::Direction;
use font_gen_core::style::registry::StyleRegistry;
use font_gen_core::variant::generator::{DEFAULT_VARIANT_COUNT, VariantGenerator};
use font_gen_core::variant::transform::apply_style;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Every style table is built once and shared by the whole process
    let registry = StyleRegistry::shared();
    println!("{} styles available:", registry.len());
    for name in registry.names() {
        println!("  {:<18} {}", name, apply_style(&registry, "Hello", name)?);
    }

    // Styles are looked up by name
    match apply_style(&registry, "Hello", "unknown") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // A seeded RNG makes the random transforms reproducible
    let generator = VariantGenerator::new(registry.clone());
    let mut rng = StdRng::seed_from_u64(2024);
    let variants = generator
        .generate_with(&mut rng, "Привет", DEFAULT_VARIANT_COUNT)
        .ok_or("nothing to show")?;
    println!("\n{} variants of {:?}", variants.len(), variants.source());

    // Empty input produces nothing
    if generator.generate("", DEFAULT_VARIANT_COUNT).is_none() {
        println!("Empty input: nothing to show");
    }

    // Sessions page through a collection, five variants at a time
    let sessions = SessionManager::default();
    let viewer = ViewerId(42);
    let id = sessions.create_default_session(viewer, variants);

    let page = sessions.get_page(id, viewer)?;
    println!("\n{page}");
    for item in &page.items {
        println!("  {item}");
    }

    // Navigation wraps around: going back from the first page shows the last
    let page = sessions.advance(id, viewer, Direction::Prev)?;
    println!("\n{page}");
    for item in &page.items {
        println!("  {item}");
    }

    // Only the viewer who asked can browse the session
    match sessions.advance(id, ViewerId(7), Direction::Next) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\n{e}"),
    }

    Ok(())
}
