use clap::{Args, Subcommand};
use gravitino_sdk::{
    metalake::{MetalakeChange, MetalakeDto},
    Client, NameIdentifier, Result,
};

use crate::{parse_key_val, print_json};

#[derive(Args, Debug)]
pub struct Metalake {
    #[clap(subcommand)]
    subcommand: MetalakeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MetalakeSubcommand {
    #[command(about = "list metalakes")]
    List,
    #[command(about = "create a metalake")]
    Create {
        name: String,
        #[arg(short, long)]
        comment: Option<String>,
        #[arg(short, long = "property", value_parser = parse_key_val::<String, String>)]
        properties: Vec<(String, String)>,
    },
    #[command(about = "show a metalake")]
    Get { name: String },
    #[command(about = "replace the comment of a metalake")]
    UpdateComment { name: String, comment: String },
    #[command(about = "rename a metalake")]
    Rename { name: String, new_name: String },
    #[command(about = "set a property on a metalake")]
    SetProperty {
        name: String,
        key: String,
        value: String,
    },
    #[command(about = "remove a property from a metalake")]
    RemoveProperty { name: String, key: String },
    #[command(about = "delete a metalake")]
    Delete { name: String },
}

impl Metalake {
    pub async fn handle(self, sdk: &Client) -> Result<()> {
        match self.subcommand {
            MetalakeSubcommand::List => print_json(&sdk.metalake.list().await?),
            MetalakeSubcommand::Create {
                name,
                comment,
                properties,
            } => {
                let ident = NameIdentifier::of_metalake(&name)?;
                let resp = sdk
                    .metalake
                    .create(&ident, comment.as_deref(), properties.into_iter().collect())
                    .await?;
                print_json(&resp);
            }
            MetalakeSubcommand::Get { name } => {
                let ident = NameIdentifier::of_metalake(&name)?;
                print_json(&sdk.metalake.load(&ident).await?);
            }
            MetalakeSubcommand::UpdateComment { name, comment } => {
                print_json(&alter(sdk, &name, MetalakeChange::update_comment(comment)).await?);
            }
            MetalakeSubcommand::Rename { name, new_name } => {
                print_json(&alter(sdk, &name, MetalakeChange::rename(new_name)).await?);
            }
            MetalakeSubcommand::SetProperty { name, key, value } => {
                print_json(&alter(sdk, &name, MetalakeChange::set_property(key, value)).await?);
            }
            MetalakeSubcommand::RemoveProperty { name, key } => {
                print_json(&alter(sdk, &name, MetalakeChange::remove_property(key)).await?);
            }
            MetalakeSubcommand::Delete { name } => {
                let ident = NameIdentifier::of_metalake(&name)?;
                print_json(&sdk.metalake.drop(&ident).await?);
            }
        }
        Ok(())
    }
}

async fn alter(sdk: &Client, name: &str, change: MetalakeChange) -> Result<MetalakeDto> {
    let ident = NameIdentifier::of_metalake(name)?;
    sdk.metalake.alter(&ident, &[change]).await
}
