use clap::{Args, Subcommand};
use gravitino_sdk::{
    fileset::{FilesetChange, FilesetType},
    Client, NameIdentifier, Namespace, Result,
};

use crate::{parse_key_val, print_json, MetalakeArg};

#[derive(Args, Debug)]
pub struct Fileset {
    #[command(flatten)]
    metalake: MetalakeArg,
    #[arg(long, help = "fileset catalog holding the schema")]
    catalog: String,
    #[arg(long, help = "schema holding the filesets")]
    schema: String,
    #[clap(subcommand)]
    subcommand: FilesetSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FilesetSubcommand {
    #[command(about = "list filesets")]
    List,
    #[command(about = "create a fileset")]
    Create {
        name: String,
        #[arg(short = 't', long = "type", default_value_t = FilesetType::Managed)]
        fileset_type: FilesetType,
        #[arg(short, long, help = "storage location, optional for managed filesets")]
        location: Option<String>,
        #[arg(short, long)]
        comment: Option<String>,
        #[arg(short, long = "property", value_parser = parse_key_val::<String, String>)]
        properties: Vec<(String, String)>,
    },
    #[command(about = "show a fileset")]
    Get { name: String },
    #[command(about = "rename a fileset")]
    Rename { name: String, new_name: String },
    #[command(about = "replace the comment of a fileset")]
    UpdateComment { name: String, comment: String },
    #[command(about = "set a property on a fileset")]
    SetProperty {
        name: String,
        key: String,
        value: String,
    },
    #[command(about = "remove a property from a fileset")]
    RemoveProperty { name: String, key: String },
    #[command(about = "delete a fileset")]
    Delete { name: String },
}

impl Fileset {
    pub async fn handle(self, sdk: &Client) -> Result<()> {
        let metalake = self.metalake.metalake;
        let catalog = sdk
            .catalog
            .load(&NameIdentifier::of_catalog(&metalake, &self.catalog)?)
            .await?;
        let filesets = catalog.as_fileset_catalog()?;
        let ident = |name: &str| {
            NameIdentifier::of_fileset(&metalake, &self.catalog, &self.schema, name)
        };

        match self.subcommand {
            FilesetSubcommand::List => {
                let namespace = Namespace::of_fileset(&metalake, &self.catalog, &self.schema)?;
                print_json(&filesets.list_filesets(&namespace).await?);
            }
            FilesetSubcommand::Create {
                name,
                fileset_type,
                location,
                comment,
                properties,
            } => {
                let fileset = filesets
                    .create_fileset(
                        &ident(&name)?,
                        comment.as_deref(),
                        fileset_type,
                        location.as_deref(),
                        properties.into_iter().collect(),
                    )
                    .await?;
                print_json(&fileset);
            }
            FilesetSubcommand::Get { name } => {
                print_json(&filesets.load_fileset(&ident(&name)?).await?);
            }
            FilesetSubcommand::Rename { name, new_name } => {
                let change = FilesetChange::rename(new_name);
                print_json(&filesets.alter_fileset(&ident(&name)?, &[change]).await?);
            }
            FilesetSubcommand::UpdateComment { name, comment } => {
                let change = FilesetChange::update_comment(comment);
                print_json(&filesets.alter_fileset(&ident(&name)?, &[change]).await?);
            }
            FilesetSubcommand::SetProperty { name, key, value } => {
                let change = FilesetChange::set_property(key, value);
                print_json(&filesets.alter_fileset(&ident(&name)?, &[change]).await?);
            }
            FilesetSubcommand::RemoveProperty { name, key } => {
                let change = FilesetChange::remove_property(key);
                print_json(&filesets.alter_fileset(&ident(&name)?, &[change]).await?);
            }
            FilesetSubcommand::Delete { name } => {
                print_json(&filesets.drop_fileset(&ident(&name)?).await?);
            }
        }
        Ok(())
    }
}
