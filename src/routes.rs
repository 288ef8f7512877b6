/// Pantallas navegables de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    ChangePassword,
    Dashboard,
    Animals,
    Iatf,
    Prediction,
    Reports,
}

/// Guard que protege cada ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Solo usuarios autenticados
    Auth,
    /// Solo usuarios NO autenticados (login, registro)
    Guest,
    /// Accesible en ambos estados
    Open,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::SignUp => "/sign-up",
            Route::ChangePassword => "/change-password",
            Route::Dashboard => "/dashboard",
            Route::Animals => "/animals",
            Route::Iatf => "/iatf",
            Route::Prediction => "/prediction",
            Route::Reports => "/reports",
        }
    }

    /// Resuelve un path a una ruta. Raíz y rutas desconocidas van al dashboard.
    pub fn from_path(path: &str) -> Route {
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Route::Login,
            "/sign-up" => Route::SignUp,
            "/change-password" => Route::ChangePassword,
            "/dashboard" => Route::Dashboard,
            "/animals" => Route::Animals,
            "/iatf" => Route::Iatf,
            "/prediction" => Route::Prediction,
            "/reports" => Route::Reports,
            _ => Route::Dashboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Iniciar Sesión - BoviPred",
            Route::SignUp => "Crear Cuenta - BoviPred",
            Route::ChangePassword => "Cambiar Contraseña - BoviPred",
            Route::Dashboard => "Dashboard - BoviPred",
            Route::Animals => "Gestión de Animales - BoviPred",
            Route::Iatf => "IATF - BoviPred",
            Route::Prediction => "Predicciones - BoviPred",
            Route::Reports => "Reportes - BoviPred",
        }
    }

    /// change-password queda abierta: se puede llegar autenticado o no
    pub fn guard(&self) -> RouteGuard {
        match self {
            Route::Login | Route::SignUp => RouteGuard::Guest,
            Route::ChangePassword => RouteGuard::Open,
            Route::Dashboard
            | Route::Animals
            | Route::Iatf
            | Route::Prediction
            | Route::Reports => RouteGuard::Auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raiz_y_desconocidas_redirigen_al_dashboard() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/ruta-inexistente"), Route::Dashboard);
    }

    #[test]
    fn paths_conocidos_resuelven_ida_y_vuelta() {
        for route in [
            Route::Login,
            Route::SignUp,
            Route::ChangePassword,
            Route::Dashboard,
            Route::Animals,
            Route::Iatf,
            Route::Prediction,
            Route::Reports,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        // Barra final tolerada
        assert_eq!(Route::from_path("/animals/"), Route::Animals);
    }

    #[test]
    fn guards_por_ruta() {
        assert_eq!(Route::Login.guard(), RouteGuard::Guest);
        assert_eq!(Route::SignUp.guard(), RouteGuard::Guest);
        assert_eq!(Route::ChangePassword.guard(), RouteGuard::Open);
        assert_eq!(Route::Dashboard.guard(), RouteGuard::Auth);
        assert_eq!(Route::Reports.guard(), RouteGuard::Auth);
    }
}
