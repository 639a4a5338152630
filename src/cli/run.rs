use std::path::Path;

use clap::Parser;
use log::{debug, info};

use crate::cli::command::{Cli, Commands, SortKey};
use crate::domain::{AddressBook, Contact, contact::phones_match};
use crate::errors::AppError;
use crate::storage::{Medium, Storage, open_storage};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let medium = Medium::parse(&cli.storage)?;
    let storage = open_storage(Some(medium))?;
    info!("using {} storage at {}", medium.as_str(), storage.path());

    let mut book = load_or_default(storage.as_ref())?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            tag,
        } => {
            let new_contact = Contact::new(
                name,
                phone,
                email.unwrap_or_default(),
                tag.unwrap_or_default(),
            );

            if !new_contact.validate_name()? {
                return Err(AppError::Validation(Contact::NAME_RULE.to_string()));
            }

            if !new_contact.validate_phone()? {
                return Err(AppError::Validation(Contact::PHONE_RULE.to_string()));
            }

            if !new_contact.validate_email()? {
                return Err(AppError::Validation(Contact::EMAIL_RULE.to_string()));
            }

            if book.contains(&new_contact) {
                return Err(AppError::Validation(
                    "Contact with this name and number already exist".to_string(),
                ));
            }

            book.add(new_contact);
            storage.save(&book)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List { sort, tag, reverse } => {
            if book.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            let mut contacts: Vec<&Contact> = match tag {
                Some(tag) => book.iter().filter(|cont| cont.tag == tag).collect(),
                None => book.iter().collect(),
            };

            if let Some(key) = sort {
                match key {
                    SortKey::Name => {
                        contacts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                    }
                    SortKey::Email => contacts
                        .sort_by(|a, b| a.email.to_lowercase().cmp(&b.email.to_lowercase())),
                    SortKey::Created => contacts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
                    SortKey::Updated => contacts.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
                }
            }

            if reverse {
                contacts.reverse();
            }

            for (i, contact) in contacts.iter().enumerate() {
                println!("{}", listing_format(i + 1, contact));
            }
            Ok(())
        }

        Commands::Delete { name, phone } => {
            let matches: Vec<&Contact> = book
                .find_by_name(&name)
                .into_iter()
                .filter(|cont| match &phone {
                    Some(phone) => phones_match(&cont.phone, phone),
                    None => true,
                })
                .collect();

            let id = match matches.as_slice() {
                [] => return Err(AppError::NotFound("Contact".to_string())),
                [only] => only.id,
                _ => {
                    return Err(AppError::Validation(
                        "Name matches multiple contacts, provide --phone to disambiguate"
                            .to_string(),
                    ));
                }
            };

            book.remove(&id);
            storage.save(&book)?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Path => {
            println!("{}", storage.path());
            Ok(())
        }
    }
}

// First run has nothing on disk yet; that is not an error at the
// application level, only at the contract level.
fn load_or_default(storage: &dyn Storage) -> Result<AddressBook, AppError> {
    if !Path::new(storage.path()).exists() {
        debug!("no existing data at {}, starting empty", storage.path());
        return Ok(AddressBook::new());
    }
    Ok(storage.load()?)
}

fn listing_format(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:15} {:^30} {:<15}",
        contact.name, contact.phone, contact.email, contact.tag
    )
}
