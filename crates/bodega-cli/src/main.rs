//! Bodega CLI - Terminal storefront
//!
//! Browse the catalog, fill a session-local cart, and check out against the
//! Bodega API without leaving the terminal.

mod api;
mod cart;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;
use uuid::Uuid;

use api::{Product, StoreClient};
use cart::Cart;
use config::Config;

#[derive(Parser)]
#[command(name = "bodega")]
#[command(about = "Bodega CLI - Terminal storefront", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Point the CLI at a Bodega API and store the URL
    Connect {
        /// API base URL (will prompt if not provided)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Catalog operations
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Order operations
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Interactive shopping session: browse, fill a cart, check out
    Shop,

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Restrict to a category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Sort ascending by "price" or "name"
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Show one product
    Show {
        /// Product ID
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List all orders
    List,
    /// Show one order with its items
    Show {
        /// Order ID
        id: Uuid,
    },
    /// Show the computed total of an order
    Total {
        /// Order ID
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Connect { url } => cmd_connect(url).await,
        Commands::Products { action } => cmd_products(action).await,
        Commands::Orders { action } => cmd_orders(action).await,
        Commands::Shop => cmd_shop().await,
        Commands::Config => cmd_config(),
    }
}

fn client() -> Result<StoreClient> {
    let config = Config::load()?;
    Ok(StoreClient::new(&config.base_url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_connect(url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let base_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("API base URL")
            .default(config.base_url.clone())
            .interact_text()
            .context("Failed to read base URL")?,
    };

    let client = StoreClient::new(&base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to the Bodega API at {}", base_url);
        }
    }

    config.set_base_url(base_url);
    config.save()?;

    println!(
        "{} Base URL saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    println!("Config file: {:?}", Config::config_path()?);
    println!("Base URL:    {}", config.base_url);
    Ok(())
}

async fn cmd_products(action: ProductAction) -> Result<()> {
    let client = client()?;

    match action {
        ProductAction::List { category, sort } => {
            let products = client
                .list_products(category.as_deref(), sort.as_deref())
                .await?;

            if products.is_empty() {
                println!("{}", "No products found.".yellow());
                return Ok(());
            }

            for product in &products {
                println!(
                    "{}  {}  {}  [{}]",
                    product.id,
                    product.name.bold(),
                    format!("${}", product.price).green(),
                    product.category
                );
            }
        }
        ProductAction::Show { id } => {
            let product = client.get_product(id).await?;
            println!("{}", product.name.bold());
            println!("  id:       {}", product.id);
            println!("  price:    {}", format!("${}", product.price).green());
            println!("  category: {}", product.category);
            println!("  image:    {}", product.image_url);
            println!("  {}", product.description);
        }
    }

    Ok(())
}

async fn cmd_orders(action: OrderAction) -> Result<()> {
    let client = client()?;

    match action {
        OrderAction::List => {
            let orders = client.list_orders().await?;

            if orders.is_empty() {
                println!("{}", "No orders yet.".yellow());
                return Ok(());
            }

            for order in &orders {
                println!(
                    "{}  {}  ({})  {} item(s)  total {}",
                    order.id,
                    order.customer.bold(),
                    order.status,
                    order.items.len(),
                    format!("${}", order.total).green()
                );
            }
        }
        OrderAction::Show { id } => {
            let order = client.get_order(id).await?;
            println!("Order {}", order.id.to_string().bold());
            println!("  customer: {} ({})", order.customer, order.dorm);
            println!("  status:   {}", order.status);
            println!("  cached total: ${}", order.total);
            for item in &order.items {
                println!(
                    "  - product {} x{} @ ${}",
                    item.product_id, item.quantity, item.price
                );
            }
        }
        OrderAction::Total { id } => {
            let total = client.order_total(id).await?;
            println!("{}", format!("${}", total).green().bold());
        }
    }

    Ok(())
}

async fn cmd_shop() -> Result<()> {
    let client = client()?;
    let products = client.list_products(None, None).await?;

    if products.is_empty() {
        println!("{}", "The shelves are empty. Come back later.".yellow());
        return Ok(());
    }

    let mut cart = Cart::new();

    loop {
        println!();
        println!(
            "Cart: {} item(s), {} product(s)",
            cart.total_items().to_string().bold(),
            cart.len()
        );

        let choices = [
            "Add to cart",
            "Remove from cart",
            "View cart",
            "Checkout",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&choices)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                if let Some(product) = pick_product(&products, "Add which product?")? {
                    cart = cart.add(product.id);
                    println!(
                        "{} {} x{}",
                        "+".green(),
                        product.name,
                        cart.quantity_of(product.id)
                    );
                }
            }
            1 => {
                if let Some(product) = pick_product(&products, "Remove which product?")? {
                    cart = cart.remove(product.id);
                    println!(
                        "{} {} x{}",
                        "-".red(),
                        product.name,
                        cart.quantity_of(product.id)
                    );
                }
            }
            2 => print_cart(&cart, &products),
            3 => {
                if cart.is_empty() {
                    println!("{}", "Your cart is empty.".yellow());
                    continue;
                }
                checkout(&client, &cart, &products).await?;
                cart = Cart::new();
            }
            _ => break,
        }
    }

    Ok(())
}

fn pick_product<'a>(products: &'a [Product], prompt: &str) -> Result<Option<&'a Product>> {
    let mut labels: Vec<String> = products
        .iter()
        .map(|p| format!("{} — ${} [{}]", p.name, p.price, p.category))
        .collect();
    labels.push("(back)".to_string());

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(products.get(choice))
}

fn print_cart(cart: &Cart, products: &[Product]) {
    if cart.is_empty() {
        println!("{}", "Your cart is empty.".yellow());
        return;
    }

    let mut subtotal = Decimal::ZERO;
    for (product_id, quantity) in cart.entries() {
        let Some(product) = products.iter().find(|p| p.id == product_id) else {
            continue;
        };
        let line = product.price * Decimal::from(quantity);
        subtotal += line;
        println!(
            "  {} x{} @ ${} = ${}",
            product.name.bold(),
            quantity,
            product.price,
            line
        );
    }
    println!("  subtotal: {}", format!("${}", subtotal).green().bold());
}

/// Two-phase checkout: create the order, then attach one item per distinct
/// product, snapshotting the catalog price fetched at session start. There
/// is no rollback; if an item call fails, the order keeps whatever was
/// attached before the failure.
async fn checkout(client: &StoreClient, cart: &Cart, products: &[Product]) -> Result<()> {
    let customer: String = Input::new()
        .with_prompt("Your name")
        .interact_text()
        .context("Failed to read name")?;
    let dorm: String = Input::new()
        .with_prompt("Dorm / room")
        .interact_text()
        .context("Failed to read dorm")?;

    let order = client.create_order(&customer, &dorm).await?;
    println!("Order {} created", order.id.to_string().bold());

    let mut attached = 0usize;
    for (product_id, quantity) in cart.entries() {
        let Some(product) = products.iter().find(|p| p.id == product_id) else {
            continue;
        };
        client
            .add_order_item(order.id, product.id, quantity as i32, product.price)
            .await
            .with_context(|| {
                format!(
                    "order {} kept its {} already-attached item(s); nothing was rolled back",
                    order.id, attached
                )
            })?;
        attached += 1;
    }

    let total = client.order_total(order.id).await?;
    println!(
        "{} Order placed: {} item(s), total {}",
        "✓".green(),
        attached,
        format!("${}", total).green().bold()
    );

    Ok(())
}
