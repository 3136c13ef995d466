use clap::{Args, Subcommand};
use gravitino_sdk::{schema::SchemaChange, Client, NameIdentifier, Namespace, Result};

use crate::{parse_key_val, print_json, MetalakeArg};

#[derive(Args, Debug)]
pub struct Schema {
    #[command(flatten)]
    metalake: MetalakeArg,
    #[arg(long, help = "catalog holding the schemas")]
    catalog: String,
    #[clap(subcommand)]
    subcommand: SchemaSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SchemaSubcommand {
    #[command(about = "list schemas")]
    List,
    #[command(about = "create a schema")]
    Create {
        name: String,
        #[arg(short, long)]
        comment: Option<String>,
        #[arg(short, long = "property", value_parser = parse_key_val::<String, String>)]
        properties: Vec<(String, String)>,
    },
    #[command(about = "show a schema")]
    Get { name: String },
    #[command(about = "set a property on a schema")]
    SetProperty {
        name: String,
        key: String,
        value: String,
    },
    #[command(about = "remove a property from a schema")]
    RemoveProperty { name: String, key: String },
    #[command(about = "delete a schema")]
    Delete {
        name: String,
        #[arg(long, help = "also delete everything the schema contains")]
        cascade: bool,
    },
}

impl Schema {
    pub async fn handle(self, sdk: &Client) -> Result<()> {
        let metalake = self.metalake.metalake;
        let catalog = sdk
            .catalog
            .load(&NameIdentifier::of_catalog(&metalake, &self.catalog)?)
            .await?;
        let schemas = catalog.as_schemas()?;
        let ident = |name: &str| NameIdentifier::of_schema(&metalake, &self.catalog, name);

        match self.subcommand {
            SchemaSubcommand::List => {
                let namespace = Namespace::of_schema(&metalake, &self.catalog)?;
                print_json(&schemas.list_schemas(&namespace).await?);
            }
            SchemaSubcommand::Create {
                name,
                comment,
                properties,
            } => {
                let schema = schemas
                    .create_schema(
                        &ident(&name)?,
                        comment.as_deref(),
                        properties.into_iter().collect(),
                    )
                    .await?;
                print_json(&schema);
            }
            SchemaSubcommand::Get { name } => {
                print_json(&schemas.load_schema(&ident(&name)?).await?);
            }
            SchemaSubcommand::SetProperty { name, key, value } => {
                let change = SchemaChange::set_property(key, value);
                print_json(&schemas.alter_schema(&ident(&name)?, &[change]).await?);
            }
            SchemaSubcommand::RemoveProperty { name, key } => {
                let change = SchemaChange::remove_property(key);
                print_json(&schemas.alter_schema(&ident(&name)?, &[change]).await?);
            }
            SchemaSubcommand::Delete { name, cascade } => {
                print_json(&schemas.drop_schema(&ident(&name)?, cascade).await?);
            }
        }
        Ok(())
    }
}
