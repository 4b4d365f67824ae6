use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

/// Encrypted on-disk cache for the portal password.
///
/// The password is stored AES-256-CBC encrypted and base64 encoded in a
/// file under the application data directory, so repeated syncs do not
/// ask for it again. Keys are embedded at build time.
#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        // Use compile-time embedded keys
        let key = APP_METADATA_ENCRYPTION_KEY.to_vec();
        let iv = APP_METADATA_ENCRYPTION_IV.to_vec();

        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            secret_file_path,
            prompt: prompt.to_owned(),
            key,
            iv,
        }
    }

    /// Returns the cached password, prompting only when the cache is
    /// missing or unreadable.
    pub fn get_or_prompt(&self) -> Result<String> {
        if fs::metadata(&self.secret_file_path).is_ok() {
            if let Ok(password) = self.decrypt() {
                return Ok(password);
            }
        }
        self.prompt()
    }

    /// Asks for the password interactively and refreshes the cache.
    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.encrypt(&password)?;
        Ok(password)
    }

    /// Removes the cached password, if any.
    pub fn forget(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }

    fn encrypt(&self, password: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(password.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        // Create directory if it doesn't exist
        if let Some(parent) = self.secret_file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;

        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(decrypted)?)
    }
}
