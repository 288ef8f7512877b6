// ============================================================================
// IATF WIZARD - máquina de pasos del formulario de registro IATF
// ============================================================================
// Cinco pasos lineales. Avanzar exige validar el paso actual; retroceder y
// saltar directo a un paso no tienen restricciones.
// ============================================================================

use crate::models::{IatfForm, IatfRecord};

pub const TOTAL_STEPS: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct IatfWizard {
    pub current_step: u8,
    pub form: IatfForm,
}

impl IatfWizard {
    /// Wizard en paso 1 con el formulario por defecto del protocolo
    pub fn nuevo() -> Self {
        Self {
            current_step: 1,
            form: IatfForm::nuevo(),
        }
    }

    /// Wizard precargado para editar un registro existente
    pub fn editar(record: &IatfRecord) -> Self {
        Self {
            current_step: 1,
            form: IatfForm::from_record(record),
        }
    }

    /// Avanza si el paso actual valida; si no, devuelve el motivo
    pub fn next_step(&mut self) -> Result<(), String> {
        self.validate_step(self.current_step)?;
        if self.current_step < TOTAL_STEPS {
            self.current_step += 1;
        }
        Ok(())
    }

    /// Retroceso sin restricciones
    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Salto directo sin restricciones (dentro de rango)
    pub fn go_to_step(&mut self, step: u8) {
        if (1..=TOTAL_STEPS).contains(&step) {
            self.current_step = step;
        }
    }

    /// Validación por paso
    pub fn validate_step(&self, step: u8) -> Result<(), String> {
        match step {
            // Paso 1: datos básicos
            1 => {
                if self.form.animal_id.is_none() {
                    return Err("Debe seleccionar un animal".to_string());
                }
                if self.form.fecha_iatf.is_empty() {
                    return Err("Debe ingresar la fecha de IATF".to_string());
                }
                Ok(())
            }
            // Paso 2: variables reproductivas
            2 => {
                if let Some(tono) = self.form.tono_uterino {
                    if !(0.0..=100.0).contains(&tono) {
                        return Err("El tono uterino debe estar entre 0 y 100".to_string());
                    }
                }
                Ok(())
            }
            // Paso 3: protocolo IATF (sin validaciones adicionales)
            3 => Ok(()),
            // Paso 4: variables ambientales
            4 => {
                if let Some(temperatura) = self.form.temperatura_ambiente {
                    if temperatura < -10.0 {
                        return Err("La temperatura parece incorrecta".to_string());
                    }
                }
                if let Some(humedad) = self.form.humedad_relativa {
                    if !(0.0..=100.0).contains(&humedad) {
                        return Err("La humedad relativa debe estar entre 0 y 100".to_string());
                    }
                }
                Ok(())
            }
            // Paso 5: observaciones
            _ => Ok(()),
        }
    }

    /// Validación final antes de guardar
    pub fn validate_all(&self) -> Result<(), String> {
        for step in 1..=TOTAL_STEPS {
            self.validate_step(step)?;
        }
        Ok(())
    }
}

impl Default for IatfWizard {
    fn default() -> Self {
        Self::nuevo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paso_1_exige_animal_y_fecha() {
        let mut wizard = IatfWizard::nuevo();
        assert_eq!(wizard.current_step, 1);

        // Sin animal seleccionado no avanza
        assert!(wizard.next_step().is_err());
        assert_eq!(wizard.current_step, 1);

        // Con animal pero sin fecha tampoco
        wizard.form.animal_id = Some(12);
        assert!(wizard.next_step().is_err());
        assert_eq!(wizard.current_step, 1);

        // Animal + fecha avanza a 2
        wizard.form.fecha_iatf = "2024-06-01".to_string();
        assert!(wizard.next_step().is_ok());
        assert_eq!(wizard.current_step, 2);
    }

    #[test]
    fn paso_2_valida_tono_uterino_si_esta_presente() {
        let mut wizard = IatfWizard::nuevo();
        wizard.form.animal_id = Some(1);
        wizard.form.fecha_iatf = "2024-06-01".to_string();
        wizard.go_to_step(2);

        wizard.form.tono_uterino = Some(150.0);
        assert!(wizard.next_step().is_err());
        assert_eq!(wizard.current_step, 2);

        wizard.form.tono_uterino = Some(70.0);
        assert!(wizard.next_step().is_ok());
        assert_eq!(wizard.current_step, 3);

        // Ausente también es válido
        wizard.go_to_step(2);
        wizard.form.tono_uterino = None;
        assert!(wizard.next_step().is_ok());
    }

    #[test]
    fn paso_4_rechaza_temperatura_implausible() {
        let mut wizard = IatfWizard::nuevo();
        wizard.go_to_step(4);

        wizard.form.temperatura_ambiente = Some(-25.0);
        assert!(wizard.next_step().is_err());
        assert_eq!(wizard.current_step, 4);

        wizard.form.temperatura_ambiente = Some(32.0);
        assert!(wizard.next_step().is_ok());
        assert_eq!(wizard.current_step, 5);
    }

    #[test]
    fn retroceso_y_saltos_sin_restricciones() {
        let mut wizard = IatfWizard::nuevo();
        wizard.go_to_step(5);
        assert_eq!(wizard.current_step, 5);

        wizard.prev_step();
        assert_eq!(wizard.current_step, 4);

        wizard.go_to_step(1);
        assert_eq!(wizard.current_step, 1);

        // Fuera de rango se ignora
        wizard.go_to_step(0);
        wizard.go_to_step(6);
        assert_eq!(wizard.current_step, 1);
    }

    #[test]
    fn en_el_ultimo_paso_no_avanza_mas() {
        let mut wizard = IatfWizard::nuevo();
        wizard.form.animal_id = Some(1);
        wizard.form.fecha_iatf = "2024-06-01".to_string();
        wizard.go_to_step(5);
        assert!(wizard.next_step().is_ok());
        assert_eq!(wizard.current_step, 5);
    }

    #[test]
    fn validacion_final_recorre_todos_los_pasos() {
        let mut wizard = IatfWizard::nuevo();
        assert!(wizard.validate_all().is_err());

        wizard.form.animal_id = Some(3);
        wizard.form.fecha_iatf = "2024-06-01".to_string();
        assert!(wizard.validate_all().is_ok());

        wizard.form.humedad_relativa = Some(130.0);
        assert!(wizard.validate_all().is_err());
    }
}
