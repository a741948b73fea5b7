//! Render a profile document and print every region

use folio_render::{FileSource, Page, Portfolio, RenderConfig};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/profile.json".to_string());

    let config = RenderConfig::default();
    let mut page = Page::portfolio(&config.regions);
    let mut portfolio = Portfolio::new(config);

    let outcomes = portfolio.init(&mut FileSource::new(path), &mut page)?;
    portfolio.advance(Duration::from_secs(1), &mut page);

    println!("Title: {}", page.title());
    for (section, outcome) in &outcomes {
        println!("{}: {:?}", section, outcome);
    }
    for id in portfolio.config().regions.all() {
        println!("\n#{}", id);
        println!("{}", page.region_html(id).unwrap_or_default());
    }
    Ok(())
}
