//! Configuração do recops carregada a partir de `recops.toml`.
//!
//! A struct [`RecopsConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults correspondentes à
//! plataforma de produção. As variáveis de ambiente `EMAIL` e `PASS` têm
//! precedência sobre o arquivo para as credenciais.

use serde::Deserialize;
use std::path::Path;

use crate::error::RecopsError;

/// Configuração de nível superior carregada de `recops.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecopsConfig {
    /// Email usado para abrir uma sessão na API.
    #[serde(default)]
    pub email: String,

    /// Senha usada para abrir uma sessão na API.
    #[serde(default)]
    pub password: String,

    /// URL base da API da plataforma.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bucket de armazenamento para onde os currículos são migrados.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Tamanho de página da listagem de currículos.
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Atraso em milissegundos entre tentativas de migração.
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
}

fn default_base_url() -> String {
    "https://api.hipeople.io/api".to_string()
}

fn default_bucket() -> String {
    "prod-assessments-media-uploads".to_string()
}

fn default_page_size() -> u64 {
    500
}

fn default_throttle_ms() -> u64 {
    1000
}

impl Default for RecopsConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            base_url: default_base_url(),
            bucket: default_bucket(),
            page_size: default_page_size(),
            throttle_ms: default_throttle_ms(),
        }
    }
}

impl RecopsConfig {
    /// Carrega a configuração de `recops.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, RecopsError> {
        let path = Path::new("recops.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<RecopsConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variáveis de ambiente têm precedência sobre o arquivo para as credenciais.
        if let Ok(email) = std::env::var("EMAIL") {
            if !email.is_empty() {
                config.email = email;
            }
        }
        if let Ok(password) = std::env::var("PASS") {
            if !password.is_empty() {
                config.password = password;
            }
        }

        Ok(config)
    }

    /// Retorna as credenciais da sessão, falhando se alguma estiver ausente.
    pub fn credentials(&self) -> Result<(&str, &str), RecopsError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(RecopsError::Config(
                "EMAIL and PASS must be set (environment or recops.toml)".to_string(),
            ));
        }
        Ok((&self.email, &self.password))
    }
}
