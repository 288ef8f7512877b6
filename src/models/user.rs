use serde::{Deserialize, Serialize};

/// Rol del usuario. Orden de capacidades: admin ⊇ veterinario ⊇ asistente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Admin,
    Veterinario,
    Asistente,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "admin",
            Rol::Veterinario => "veterinario",
            Rol::Asistente => "asistente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rol::Admin => "Administrador",
            Rol::Veterinario => "Veterinario",
            Rol::Asistente => "Asistente",
        }
    }

    /// true si este rol alcanza las capacidades de `required`
    pub fn at_least(&self, required: Rol) -> bool {
        match required {
            Rol::Admin => matches!(self, Rol::Admin),
            Rol::Veterinario => matches!(self, Rol::Admin | Rol::Veterinario),
            Rol::Asistente => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub apellido: String,
    pub email: String,
    pub rol: Rol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub activo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultimo_acceso: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.name, self.apellido)
    }
}

/// Filtros del listado de usuarios (solo admin)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub rol: Option<Rol>,
    pub activo: Option<bool>,
}

impl UserFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(rol) = self.rol {
            query.push(("rol".to_string(), rol.as_str().to_string()));
        }
        if let Some(activo) = self.activo {
            query.push(("activo".to_string(), activo.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_se_serializan_en_minusculas() {
        assert_eq!(serde_json::to_string(&Rol::Veterinario).unwrap(), "\"veterinario\"");
        let rol: Rol = serde_json::from_str("\"asistente\"").unwrap();
        assert_eq!(rol, Rol::Asistente);
    }

    #[test]
    fn orden_de_roles() {
        assert!(Rol::Admin.at_least(Rol::Admin));
        assert!(Rol::Admin.at_least(Rol::Veterinario));
        assert!(Rol::Veterinario.at_least(Rol::Veterinario));
        assert!(!Rol::Veterinario.at_least(Rol::Admin));
        assert!(!Rol::Asistente.at_least(Rol::Veterinario));
        assert!(Rol::Asistente.at_least(Rol::Asistente));
    }
}
