use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use tienda_core::currency::{Currency, RateTable};
use tienda_core::discount::{DiscountAnalysis, DiscountPolicy, Verdict};
use tienda_pipeline::candidate_pipeline::CandidatePipeline;
use tienda_pipeline::catalog_loader::load_catalog_file;
use tienda_pipeline::pipelines::similar_products::SimilarProductsPipeline;
use tienda_pipeline::summary::{summarize, InventorySummary};
use tienda_pipeline::types::{CatalogQuery, ProductCandidate};

/// Catalog prices are quoted in Colombian pesos.
const CATALOG_CURRENCY: Currency = Currency::Cop;

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportJson {
    generated_at: String,
    pipeline_ms: u128,
    analysis: DiscountAnalysis,
    max_safe_discount_pct: f64,
    conversion: ConversionJson,
    similar_products: Vec<ProductJson>,
    inventory: InventorySummary,
}

#[derive(Serialize)]
struct ConversionJson {
    currency: String,
    rate: f64,
    final_price: f64,
}

#[derive(Serialize)]
struct ProductJson {
    name: String,
    reference: String,
    code: String,
    quantity: i64,
    price: f64,
    stock_level: String,
    tier: String,
    relevance_score: f64,
}

fn build_product_json(candidate: &ProductCandidate) -> ProductJson {
    ProductJson {
        name: candidate.name.clone(),
        reference: candidate.reference.clone(),
        code: candidate.code.clone(),
        quantity: candidate.quantity,
        price: candidate.price,
        stock_level: candidate
            .stock_level
            .map(|s| s.to_string())
            .unwrap_or_default(),
        tier: candidate.tier.map(|t| t.to_string()).unwrap_or_default(),
        relevance_score: candidate.relevance_score.unwrap_or(0.0),
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

/// Format an amount with comma thousands separators.
fn format_money(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };

    if whole < 1_000 {
        return format!("{}{}", sign, whole);
    }

    let s = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped.chars().rev().collect::<String>())
}

#[allow(clippy::too_many_arguments)]
fn print_human(
    analysis: &DiscountAnalysis,
    max_safe: f64,
    currency: Currency,
    converted: f64,
    similar: &[ProductCandidate],
    inventory: &InventorySummary,
    load_ms: u128,
    pipeline_ms: u128,
) {
    println!();
    println!("  \u{2554}{}\u{2557}", "\u{2550}".repeat(62));
    println!("  \u{2551}{:^62}\u{2551}", "TIENDA \u{2014} Discount Safety Report");
    println!("  \u{255a}{}\u{255d}", "\u{2550}".repeat(62));
    println!();

    println!(
        "  Retail price       ${:>12}   Tier: {} (recommended {})",
        format_money(analysis.price),
        analysis.tier,
        analysis.recommended,
    );
    println!(
        "  Wholesale basis    ${:>12}",
        format_money(analysis.wholesale_price)
    );
    println!(
        "  Discount           {:>12}   (-${})",
        format!("{}%", analysis.discount_pct),
        format_money(analysis.discount_amount),
    );
    println!(
        "  Final price        ${:>12}   \u{2248} {:.2} {}",
        format_money(analysis.final_price),
        converted,
        currency,
    );
    println!();

    let verdict_icon = match analysis.verdict {
        Verdict::Optimal => "OK ",
        Verdict::SafeOutOfBand => "!  ",
        Verdict::Risky => "!! ",
    };
    println!(
        "  {} {}  \u{00b7}  margin {:.1}%  \u{00b7}  max safe discount {:.1}%",
        verdict_icon, analysis.verdict, analysis.margin_pct, max_safe,
    );
    println!();

    if similar.is_empty() {
        println!("  No comparable products in stock near this price.");
    } else {
        println!("  Comparable products in inventory:");
        println!("  {:\u{2500}<64}", "");
        for (i, product) in similar.iter().enumerate() {
            println!(
                "  {}. {:28} {:>10}  qty {:>4}  {}",
                i + 1,
                product.name,
                format!("${}", format_money(product.price)),
                product.quantity,
                product
                    .stock_level
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            );
        }
        println!("  {:\u{2500}<64}", "");
    }

    println!();
    println!(
        "  Catalog: {} products \u{00b7} ${} total value \u{00b7} {} out of stock \u{00b7} avg ${}",
        inventory.total_products,
        format_money(inventory.total_value),
        inventory.out_of_stock,
        format_money(inventory.average_price),
    );
    println!(
        "  \u{23f1}  CSV loaded in {}ms \u{00b7} Pipeline ran in {}ms",
        load_ms, pipeline_ms
    );
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!("Usage: tienda-server <catalog.csv> <price> <discount-pct> [--top N] [--currency CODE] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --top       Number of comparable products to return (default: 5)");
    eprintln!("  --currency  Quote the final price in this currency (default: USD)");
    eprintln!("  --json      Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  tienda-server fixtures/sample_catalog.csv 50000 5");
    eprintln!("  tienda-server fixtures/sample_catalog.csv 50000 12.5 --currency EUR --json");
    process::exit(1);
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        usage();
    }

    let csv_path = &args[1];
    let price: f64 = args[2].parse().unwrap_or_else(|_| {
        eprintln!("Error: <price> must be a number, got '{}'", args[2]);
        process::exit(1);
    });
    let discount_pct: f64 = args[3].parse().unwrap_or_else(|_| {
        eprintln!("Error: <discount-pct> must be a number, got '{}'", args[3]);
        process::exit(1);
    });

    // Parse optional flags
    let mut top_k: usize = 5;
    let mut currency = Currency::Usd;
    let mut json_output = false;
    let mut i = 4;
    while i < args.len() {
        match args[i].as_str() {
            "--top" => {
                if i + 1 < args.len() {
                    top_k = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: --top requires a positive integer");
                        process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --top requires a number");
                    process::exit(1);
                }
            }
            "--currency" => {
                if i + 1 < args.len() {
                    currency = args[i + 1].parse().unwrap_or_else(|e| {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --currency requires an ISO code");
                    process::exit(1);
                }
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    // Run the discount analysis before touching the catalog, so bad input
    // fails fast with the validation message.
    let policy = DiscountPolicy::default();
    let analysis = match policy.analyze(price, discount_pct) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let max_safe = policy.max_safe_discount(price);

    let rates = RateTable::default();
    let (rate, converted) = match rates.rate(CATALOG_CURRENCY, currency) {
        Ok(rate) => (rate, analysis.final_price * rate),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Load the catalog
    let load_start = Instant::now();
    let records = match load_catalog_file(csv_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading CSV: {}", e);
            process::exit(1);
        }
    };
    let load_ms = load_start.elapsed().as_millis();
    log::info!("loaded {} catalog records from {}", records.len(), csv_path);

    let inventory = summarize(&records);

    // Find comparable products around the analyzed price
    let pipeline_start = Instant::now();
    let pipeline = SimilarProductsPipeline::with_catalog_and_size(records, top_k);
    let query = CatalogQuery::similar_to("report-001", price);
    let result = pipeline.execute(query).await;
    let pipeline_ms = pipeline_start.elapsed().as_millis();

    if json_output {
        let report = ReportJson {
            generated_at: Utc::now().to_rfc3339(),
            pipeline_ms,
            analysis,
            max_safe_discount_pct: max_safe,
            conversion: ConversionJson {
                currency: currency.to_string(),
                rate,
                final_price: converted,
            },
            similar_products: result
                .selected_candidates
                .iter()
                .map(build_product_json)
                .collect(),
            inventory,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        print_human(
            &analysis,
            max_safe,
            currency,
            converted,
            &result.selected_candidates,
            &inventory,
            load_ms,
            pipeline_ms,
        );
    }
}
