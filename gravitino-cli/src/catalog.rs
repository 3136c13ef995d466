use clap::{Args, Subcommand};
use gravitino_sdk::{
    catalog::{CatalogChange, CatalogType},
    Client, NameIdentifier, Namespace, Result,
};

use crate::{parse_key_val, print_json, MetalakeArg};

#[derive(Args, Debug)]
pub struct Catalog {
    #[command(flatten)]
    metalake: MetalakeArg,
    #[clap(subcommand)]
    subcommand: CatalogSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    #[command(about = "list catalogs")]
    List {
        #[arg(long, help = "include the full catalog details")]
        details: bool,
    },
    #[command(about = "create a catalog")]
    Create {
        name: String,
        #[arg(short = 't', long = "type", help = "relational, fileset or messaging")]
        catalog_type: CatalogType,
        #[arg(long)]
        provider: String,
        #[arg(short, long)]
        comment: Option<String>,
        #[arg(short, long = "property", value_parser = parse_key_val::<String, String>)]
        properties: Vec<(String, String)>,
    },
    #[command(about = "show a catalog")]
    Get { name: String },
    #[command(about = "replace the comment of a catalog")]
    UpdateComment { name: String, comment: String },
    #[command(about = "rename a catalog")]
    Rename { name: String, new_name: String },
    #[command(about = "set a property on a catalog")]
    SetProperty {
        name: String,
        key: String,
        value: String,
    },
    #[command(about = "remove a property from a catalog")]
    RemoveProperty { name: String, key: String },
    #[command(about = "delete a catalog")]
    Delete { name: String },
}

impl Catalog {
    pub async fn handle(self, sdk: &Client) -> Result<()> {
        let metalake = self.metalake.metalake;
        let ident = |name: &str| NameIdentifier::of_catalog(&metalake, name);

        match self.subcommand {
            CatalogSubcommand::List { details } => {
                let namespace = Namespace::of_catalog(&metalake)?;
                if details {
                    let catalogs = sdk.catalog.list_info(&namespace).await?;
                    let dtos: Vec<_> = catalogs.iter().map(|c| c.dto()).collect();
                    print_json(&dtos);
                } else {
                    print_json(&sdk.catalog.list(&namespace).await?);
                }
            }
            CatalogSubcommand::Create {
                name,
                catalog_type,
                provider,
                comment,
                properties,
            } => {
                let catalog = sdk
                    .catalog
                    .create(
                        &ident(&name)?,
                        catalog_type,
                        &provider,
                        comment.as_deref(),
                        properties.into_iter().collect(),
                    )
                    .await?;
                print_json(catalog.dto());
            }
            CatalogSubcommand::Get { name } => {
                print_json(sdk.catalog.load(&ident(&name)?).await?.dto());
            }
            CatalogSubcommand::UpdateComment { name, comment } => {
                let change = CatalogChange::update_comment(comment);
                print_json(sdk.catalog.alter(&ident(&name)?, &[change]).await?.dto());
            }
            CatalogSubcommand::Rename { name, new_name } => {
                let change = CatalogChange::rename(new_name);
                print_json(sdk.catalog.alter(&ident(&name)?, &[change]).await?.dto());
            }
            CatalogSubcommand::SetProperty { name, key, value } => {
                let change = CatalogChange::set_property(key, value);
                print_json(sdk.catalog.alter(&ident(&name)?, &[change]).await?.dto());
            }
            CatalogSubcommand::RemoveProperty { name, key } => {
                let change = CatalogChange::remove_property(key);
                print_json(sdk.catalog.alter(&ident(&name)?, &[change]).await?.dto());
            }
            CatalogSubcommand::Delete { name } => {
                print_json(&sdk.catalog.drop(&ident(&name)?).await?);
            }
        }
        Ok(())
    }
}
