//! Mock patient directory and the clinical records behind two of the profiles.

use crate::models::{ClinicalRecord, FileKind, Patient, PatientFile, UpcomingVisit, VisitRecord};

pub fn patients() -> Vec<Patient> {
    vec![
        patient("1", "María López", "V-12.345.678", "+58 412-1234567", 8, "15 Ene 2025", "ML"),
        patient("2", "Carlos Méndez", "V-11.222.333", "+58 424-9876543", 3, "10 Ene 2025", "CM"),
        patient("3", "Ana Rodríguez", "V-14.567.890", "+58 416-5554321", 12, "08 Ene 2025", "AR"),
        patient("4", "Luis García", "V-16.789.012", "+58 426-1112233", 1, "03 Ene 2025", "LG"),
        patient("5", "Sofía Martínez", "V-19.345.678", "+58 412-7778899", 5, "29 Dic 2024", "SM"),
        patient("6", "Pedro Jiménez", "V-13.456.789", "+58 414-3334455", 2, "20 Dic 2024", "PJ"),
        patient("7", "Laura Torres", "V-17.890.123", "+58 424-6667788", 7, "15 Dic 2024", "LT"),
        patient("8", "Roberto Díaz", "V-15.234.567", "+58 416-9990011", 4, "10 Dic 2024", "RD"),
    ]
}

fn patient(
    id: &str,
    full_name: &str,
    national_id: &str,
    phone: &str,
    visits: u32,
    last_visit: &str,
    initials: &str,
) -> Patient {
    Patient {
        id: id.to_string(),
        full_name: full_name.to_string(),
        national_id: national_id.to_string(),
        phone: phone.to_string(),
        visits,
        last_visit: last_visit.to_string(),
        initials: initials.to_string(),
    }
}

pub fn clinical_records() -> Vec<(&'static str, ClinicalRecord)> {
    vec![
        (
            "1",
            ClinicalRecord {
                age: 34,
                blood_type: "O+".to_string(),
                history: vec![
                    visit(
                        "15 Ene 2025",
                        "Consulta General",
                        "Dolor de cabeza, fatiga, mareos leves",
                        "Tensión arterial elevada (140/90 mmHg). Posible hipertensión estadio 1.",
                        "Se receta Losartán 50mg, 1 vez al día. Control en 30 días. Recomendar dieta baja en sodio y ejercicio aeróbico moderado.",
                    ),
                    visit(
                        "01 Dic 2024",
                        "Revisión Periódica",
                        "Sin síntomas agudos. Chequeo de rutina.",
                        "Paciente en buen estado general. Colesterol LDL levemente elevado (130 mg/dL).",
                        "Se solicita perfil lipídico completo. Recomendar dieta mediterránea. Control en 3 meses.",
                    ),
                    visit(
                        "15 Oct 2024",
                        "Control Cardiológico",
                        "Palpitaciones ocasionales, sin dolor precordial",
                        "EKG normal. Holter 24h sin arritmias significativas.",
                        "Descartada patología cardíaca. Palpitaciones de origen ansioso. Manejo con técnicas de relajación.",
                    ),
                ],
                files: vec![
                    file("Perfil Lipídico Dic-2024.pdf", FileKind::Pdf, "245 KB", "05 Dic 2024"),
                    file("EKG Oct-2024.pdf", FileKind::Pdf, "1.2 MB", "16 Oct 2024"),
                    file("Foto lesión piel.jpg", FileKind::Image, "3.4 MB", "01 Dic 2024"),
                ],
                upcoming: vec![upcoming("15 Feb 2025", "09:00 AM", "Control Hipertensión")],
            },
        ),
        (
            "2",
            ClinicalRecord {
                age: 45,
                blood_type: "A+".to_string(),
                history: vec![visit(
                    "10 Ene 2025",
                    "Revisión Periódica",
                    "Cansancio, aumento de peso reciente (+5kg en 3 meses)",
                    "Hipotiroidismo subclínico. TSH elevada (6.2 mUI/L).",
                    "Se inicia Levotiroxina 25mcg en ayunas. Control de TSH en 6 semanas.",
                )],
                files: vec![file("Perfil Tiroideo Ene-2025.pdf", FileKind::Pdf, "180 KB", "10 Ene 2025")],
                upcoming: vec![upcoming("20 Feb 2025", "10:00 AM", "Control Tiroideo")],
            },
        ),
    ]
}

fn visit(date: &str, service: &str, symptoms: &str, diagnosis: &str, notes: &str) -> VisitRecord {
    VisitRecord {
        date: date.to_string(),
        service: service.to_string(),
        symptoms: symptoms.to_string(),
        diagnosis: diagnosis.to_string(),
        notes: notes.to_string(),
    }
}

fn file(name: &str, kind: FileKind, size: &str, date: &str) -> PatientFile {
    PatientFile { name: name.to_string(), kind, size: size.to_string(), date: date.to_string() }
}

fn upcoming(date: &str, time: &str, service: &str) -> UpcomingVisit {
    UpcomingVisit { date: date.to_string(), time: time.to_string(), service: service.to_string() }
}

/// Stand-in for ids that aren't in the directory.
pub fn placeholder_patient(id: &str) -> Patient {
    patient(id, "Paciente", "N/A", "N/A", 0, "N/A", "P")
}

pub fn placeholder_record() -> ClinicalRecord {
    ClinicalRecord { age: 0, blood_type: "N/A".to_string(), ..ClinicalRecord::default() }
}
