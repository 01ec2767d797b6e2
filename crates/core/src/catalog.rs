//! The built-in syllabus table.
//!
//! Topic keys are positional, so existing chapters and topics must keep their
//! order; new entries go at the end of their list.

use crate::model::{Chapter, Subject, SubjectId, Syllabus, Topic};

fn topic(label: &str) -> Topic {
    Topic::new(label).expect("builtin topic label must be non-empty")
}

fn chapter(title: &str, topics: &[&str]) -> Chapter {
    Chapter::new(title, topics.iter().copied().map(topic).collect())
        .expect("builtin chapter title must be non-empty")
}

fn subject(id: &str, title: &str, chapters: Vec<Chapter>) -> Subject {
    let id = SubjectId::new(id).expect("builtin subject id must be a valid slug");
    Subject::new(id, title, chapters).expect("builtin subject title must be non-empty")
}

/// Builds the fixed Class-12 syllabus the tracker ships with.
///
/// # Panics
///
/// Panics if the compiled-in table fails presence validation, which would be
/// a programming error in this module.
#[must_use]
pub fn builtin() -> Syllabus {
    let physics = subject(
        "physics",
        "Physics",
        vec![
            chapter(
                "Electric Charges & Fields",
                &[
                    "Electric charge & Coulomb’s law",
                    "Electric field & field lines",
                    "Gauss’s law — applications",
                ],
            ),
            chapter(
                "Electrostatic Potential & Capacitance",
                &[
                    "Electric potential",
                    "Capacitance and dielectrics",
                    "Energy stored in capacitors",
                ],
            ),
            chapter(
                "Current Electricity",
                &[
                    "Ohm’s law, resistivity",
                    "Kirchhoff’s rules & circuits",
                    "Wheatstone bridge",
                ],
            ),
            chapter(
                "Magnetism & Moving Charges",
                &[
                    "Biot–Savart & Ampere’s law",
                    "Force on moving charge",
                    "Magnetic dipole & torque",
                ],
            ),
            chapter(
                "Optics (Ray & Wave)",
                &[
                    "Reflection/refraction, lenses",
                    "Young’s double slit — interference",
                    "Diffraction & polarization",
                ],
            ),
            chapter(
                "Modern Physics",
                &[
                    "Photoelectric effect",
                    "Bohr model of atom",
                    "Nuclear reactions, radioactivity",
                ],
            ),
        ],
    );

    let chemistry = subject(
        "chemistry",
        "Chemistry",
        vec![
            chapter(
                "Solutions",
                &["Concentration terms", "Raoult’s law", "Colligative properties"],
            ),
            chapter(
                "Electrochemistry",
                &["Galvanic cells", "Nernst equation", "Conductance"],
            ),
            chapter(
                "Chemical Kinetics",
                &["Rate laws", "Order and molecularity", "Arrhenius eqn"],
            ),
            chapter(
                "d- and f-Block Elements",
                &["Electronic config", "Oxidation states", "Important compounds"],
            ),
            chapter(
                "p-Block Elements",
                &["Electronic config", "Oxidation states", "Important compounds"],
            ),
            chapter(
                "Organic Chemistry",
                &[
                    "Haloalkanes & Haloarenes",
                    "Alcohols, Phenols & Ethers",
                    "Aldehydes, Ketones, Acids",
                    "Amines & Diazonium chemistry",
                ],
            ),
            chapter(
                "Biomolecules",
                &["Carbohydrates", "Proteins & enzymes", "Vitamins & nucleic acids"],
            ),
        ],
    );

    let math = subject(
        "math",
        "Mathematics",
        vec![
            chapter(
                "Relations & Functions",
                &["Types of relations", "Injective/Surjective", "Inverse functions"],
            ),
            chapter(
                "Calculus",
                &[
                    "Continuity & differentiability",
                    "Applications of derivatives",
                    "Integrals & applications",
                ],
            ),
            chapter(
                "Matrices & Determinants",
                &["Matrix operations", "Inverse & applications", "Determinants"],
            ),
            chapter(
                "Vectors & 3D Geometry",
                &["Vector algebra", "Lines and planes in 3D", "Skew lines & distance"],
            ),
            chapter(
                "Probability & Linear Programming",
                &["Conditional probability", "Bayes theorem", "LP graphical method"],
            ),
            chapter(
                "Differential Equations",
                &["First order linear", "Separable equations", "Applications"],
            ),
        ],
    );

    Syllabus::new(vec![physics, chemistry, math])
        .expect("builtin subject ids must be unique")
}
