//! Autor embutido em posts e comentários

use serde::{Deserialize, Serialize};

/// Usuário resumido que aparece em `created_by` / `updated_by`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Nome de exibição
    pub name: String,

    /// Screen name (handle)
    pub screen_name: String,

    /// URL do ícone/avatar
    pub icon: String,
}
