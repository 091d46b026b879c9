//! The assessment record: nine fixed groups of free-form text fields.
//!
//! Every leaf is a `String`. Numbers are only interpreted at display time
//! (see [`crate::chart`]). The group and field sets are closed: each group is
//! a struct with a matching `Copy` field enum, and [`FieldRef`] names one leaf
//! of the whole record. Runtime names only enter through [`FieldRef::parse`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Declares one record group: the struct, its field enum, and the accessors
/// that tie the two together.
macro_rules! assessment_group {
    (
        $(#[$meta:meta])*
        $group:ident / $field_enum:ident {
            $( $field:ident => $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub struct $group {
            $(
                #[serde(rename = $wire, default)]
                pub $field: String,
            )+
        }

        #[doc = concat!("A field of [`", stringify!($group), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $field_enum {
            $( $variant, )+
        }

        impl $field_enum {
            pub const ALL: &'static [Self] = &[$( Self::$variant, )+];

            /// Wire name, as used in JSON and in `PUT /assessment/{group}/{field}`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl $group {
            pub fn get(&self, field: $field_enum) -> &str {
                match field {
                    $( $field_enum::$variant => &self.$field, )+
                }
            }

            pub fn set(&mut self, field: $field_enum, value: String) {
                match field {
                    $( $field_enum::$variant => self.$field = value, )+
                }
            }
        }

        impl From<$field_enum> for FieldRef {
            fn from(field: $field_enum) -> Self {
                FieldRef::$group(field)
            }
        }
    };
}

assessment_group! {
    /// Who is being assessed, by whom, and with what objective.
    Identification / IdentificationField {
        name => Name = "name",
        sex => Sex = "sex",
        trained => Trained = "trained",
        phone => Phone = "phone",
        mobile => Mobile = "mobile",
        email => Email = "email",
        profession => Profession = "profession",
        address => Address = "address",
        birth_date => BirthDate = "birthDate",
        age => Age = "age",
        assessment_date => AssessmentDate = "assessmentDate",
        next_assessment_date => NextAssessmentDate = "nextAssessmentDate",
        assessor => Assessor = "assessor",
        time => Time = "time",
        objective => Objective = "objective",
    }
}

assessment_group! {
    /// Height, weight and derived indices. Blood pressure is split into the
    /// systolic and resting (diastolic) halves.
    Anthropometrics / AnthropometricsField {
        height => Height = "height",
        weight => Weight = "weight",
        bmi => Bmi = "bmi",
        conicity_index => ConicityIndex = "conicityIndex",
        whr => Whr = "whr",
        whr_risk => WhrRisk = "whrRisk",
        blood_pressure => BloodPressure = "bloodPressure",
        resting_blood_pressure => RestingBloodPressure = "restingBloodPressure",
    }
}

assessment_group! {
    /// Body perimeters in centimetres.
    Perimeters / PerimetersField {
        shoulders => Shoulders = "shoulders",
        chest => Chest = "chest",
        waist => Waist = "waist",
        abdomen => Abdomen = "abdomen",
        hip => Hip = "hip",
        forearm_r => ForearmR = "forearmR",
        forearm_l => ForearmL = "forearmL",
        arm_r => ArmR = "armR",
        arm_l => ArmL = "armL",
        thigh_r => ThighR = "thighR",
        thigh_l => ThighL = "thighL",
        calf_r => CalfR = "calfR",
        calf_l => CalfL = "calfL",
    }
}

assessment_group! {
    /// Skinfold thicknesses in millimetres.
    Skinfolds / SkinfoldsField {
        triceps => Triceps = "triceps",
        subscapular => Subscapular = "subscapular",
        suprailiac => Suprailiac = "suprailiac",
        abdominal => Abdominal = "abdominal",
        supraspinale => Supraspinale = "supraspinale",
        thigh => Thigh = "thigh",
        calf => Calf = "calf",
        chest => Chest = "chest",
        midaxillary => Midaxillary = "midaxillary",
        biceps => Biceps = "biceps",
    }
}

assessment_group! {
    /// Heart-rate zones and predicted VO2max.
    Cardio / CardioField {
        resting_hr => RestingHr = "restingHR",
        max_hr => MaxHr = "maxHR",
        lower_limit_hr => LowerLimitHr = "lowerLimitHR",
        upper_limit_hr => UpperLimitHr = "upperLimitHR",
        recovery_hr => RecoveryHr = "recoveryHR",
        vo2max => Vo2max = "vo2max",
    }
}

assessment_group! {
    Neuromuscular / NeuromuscularField {
        abdominal_reps => AbdominalReps = "abdominalReps",
        abdominal_class => AbdominalClass = "abdominalClass",
        pushup_reps => PushupReps = "pushupReps",
        pushup_class => PushupClass = "pushupClass",
    }
}

assessment_group! {
    /// Protocol and resulting body-fat percentage.
    BodyCompAssessment / BodyCompAssessmentField {
        protocol => Protocol = "protocol",
        fat_percentage => FatPercentage = "fatPercentage",
        fat_percentage_class => FatPercentageClass = "fatPercentageClass",
    }
}

assessment_group! {
    /// Weights in kilograms. These four values feed the chart.
    BodyComposition / BodyCompositionField {
        fat_weight => FatWeight = "fatWeight",
        lean_mass => LeanMass = "leanMass",
        current_weight => CurrentWeight = "currentWeight",
        desired_weight => DesiredWeight = "desiredWeight",
    }
}

assessment_group! {
    Postural / PosturalField {
        indication => Indication = "indication",
    }
}

/// One complete assessment.
///
/// Groups sit behind `Arc` so that an edit through [`crate::editor`] shares
/// every untouched group with the record it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub identification: Arc<Identification>,
    pub anthropometrics: Arc<Anthropometrics>,
    pub perimeters: Arc<Perimeters>,
    pub skinfolds: Arc<Skinfolds>,
    pub cardio: Arc<Cardio>,
    pub neuromuscular: Arc<Neuromuscular>,
    pub body_comp_assessment: Arc<BodyCompAssessment>,
    pub body_composition: Arc<BodyComposition>,
    pub postural: Arc<Postural>,
}

/// A top-level section of [`AssessmentRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Identification,
    Anthropometrics,
    Perimeters,
    Skinfolds,
    Cardio,
    Neuromuscular,
    BodyCompAssessment,
    BodyComposition,
    Postural,
}

impl Group {
    pub const ALL: &'static [Self] = &[
        Self::Identification,
        Self::Anthropometrics,
        Self::Perimeters,
        Self::Skinfolds,
        Self::Cardio,
        Self::Neuromuscular,
        Self::BodyCompAssessment,
        Self::BodyComposition,
        Self::Postural,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Identification => "identification",
            Self::Anthropometrics => "anthropometrics",
            Self::Perimeters => "perimeters",
            Self::Skinfolds => "skinfolds",
            Self::Cardio => "cardio",
            Self::Neuromuscular => "neuromuscular",
            Self::BodyCompAssessment => "bodyCompAssessment",
            Self::BodyComposition => "bodyComposition",
            Self::Postural => "postural",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// Every field of this group, in declaration order.
    pub fn fields(self) -> Vec<FieldRef> {
        match self {
            Self::Identification => collect(IdentificationField::ALL),
            Self::Anthropometrics => collect(AnthropometricsField::ALL),
            Self::Perimeters => collect(PerimetersField::ALL),
            Self::Skinfolds => collect(SkinfoldsField::ALL),
            Self::Cardio => collect(CardioField::ALL),
            Self::Neuromuscular => collect(NeuromuscularField::ALL),
            Self::BodyCompAssessment => collect(BodyCompAssessmentField::ALL),
            Self::BodyComposition => collect(BodyCompositionField::ALL),
            Self::Postural => collect(PosturalField::ALL),
        }
    }
}

fn collect<F: Copy + Into<FieldRef>>(fields: &[F]) -> Vec<FieldRef> {
    fields.iter().map(|&f| f.into()).collect()
}

/// A single leaf of [`AssessmentRecord`]: a group plus one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRef {
    Identification(IdentificationField),
    Anthropometrics(AnthropometricsField),
    Perimeters(PerimetersField),
    Skinfolds(SkinfoldsField),
    Cardio(CardioField),
    Neuromuscular(NeuromuscularField),
    BodyCompAssessment(BodyCompAssessmentField),
    BodyComposition(BodyCompositionField),
    Postural(PosturalField),
}

impl FieldRef {
    pub fn group(self) -> Group {
        match self {
            Self::Identification(_) => Group::Identification,
            Self::Anthropometrics(_) => Group::Anthropometrics,
            Self::Perimeters(_) => Group::Perimeters,
            Self::Skinfolds(_) => Group::Skinfolds,
            Self::Cardio(_) => Group::Cardio,
            Self::Neuromuscular(_) => Group::Neuromuscular,
            Self::BodyCompAssessment(_) => Group::BodyCompAssessment,
            Self::BodyComposition(_) => Group::BodyComposition,
            Self::Postural(_) => Group::Postural,
        }
    }

    /// Wire name of the field within its group.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identification(f) => f.name(),
            Self::Anthropometrics(f) => f.name(),
            Self::Perimeters(f) => f.name(),
            Self::Skinfolds(f) => f.name(),
            Self::Cardio(f) => f.name(),
            Self::Neuromuscular(f) => f.name(),
            Self::BodyCompAssessment(f) => f.name(),
            Self::BodyComposition(f) => f.name(),
            Self::Postural(f) => f.name(),
        }
    }

    /// Resolve a `(group, field)` pair of wire names.
    ///
    /// Both names are case-sensitive. Anything outside the fixed set fails
    /// with [`CoreError::InvalidFieldReference`].
    pub fn parse(group: &str, field: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidFieldReference {
            group: group.to_string(),
            field: field.to_string(),
        };

        let group = Group::from_name(group).ok_or_else(invalid)?;
        let resolved = match group {
            Group::Identification => IdentificationField::from_name(field).map(Self::from),
            Group::Anthropometrics => AnthropometricsField::from_name(field).map(Self::from),
            Group::Perimeters => PerimetersField::from_name(field).map(Self::from),
            Group::Skinfolds => SkinfoldsField::from_name(field).map(Self::from),
            Group::Cardio => CardioField::from_name(field).map(Self::from),
            Group::Neuromuscular => NeuromuscularField::from_name(field).map(Self::from),
            Group::BodyCompAssessment => BodyCompAssessmentField::from_name(field).map(Self::from),
            Group::BodyComposition => BodyCompositionField::from_name(field).map(Self::from),
            Group::Postural => PosturalField::from_name(field).map(Self::from),
        };
        resolved.ok_or_else(invalid)
    }

    /// Every leaf of the record, group by group.
    pub fn all() -> impl Iterator<Item = FieldRef> {
        Group::ALL.iter().flat_map(|g| g.fields())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group().name(), self.name())
    }
}

impl AssessmentRecord {
    /// Read any leaf.
    pub fn get(&self, field: FieldRef) -> &str {
        match field {
            FieldRef::Identification(f) => self.identification.get(f),
            FieldRef::Anthropometrics(f) => self.anthropometrics.get(f),
            FieldRef::Perimeters(f) => self.perimeters.get(f),
            FieldRef::Skinfolds(f) => self.skinfolds.get(f),
            FieldRef::Cardio(f) => self.cardio.get(f),
            FieldRef::Neuromuscular(f) => self.neuromuscular.get(f),
            FieldRef::BodyCompAssessment(f) => self.body_comp_assessment.get(f),
            FieldRef::BodyComposition(f) => self.body_composition.get(f),
            FieldRef::Postural(f) => self.postural.get(f),
        }
    }

    /// The record a new session starts from.
    pub fn default_snapshot() -> Self {
        Self {
            identification: Arc::new(Identification {
                name: "ivan lima de azevedo".into(),
                sex: "Fem".into(),
                trained: "Sim".into(),
                phone: String::new(),
                mobile: "9984457890".into(),
                email: String::new(),
                profession: String::new(),
                address: "rua 1 n 24 vila ipiranga".into(),
                birth_date: "1968-05-10".into(),
                age: "57 anos 2 meses".into(),
                assessment_date: "2025-10-29".into(),
                next_assessment_date: "2026-01-29".into(),
                assessor: "40".into(),
                time: "17:00".into(),
                objective: "perda de peso".into(),
            }),
            anthropometrics: Arc::new(Anthropometrics {
                height: "164.00".into(),
                weight: "70.00".into(),
                bmi: "26.03".into(),
                conicity_index: "1.31".into(),
                whr: "0.96".into(),
                whr_risk: "Muito Alto".into(),
                blood_pressure: "14".into(),
                resting_blood_pressure: "9".into(),
            }),
            perimeters: Arc::new(Perimeters {
                shoulders: "111.00".into(),
                chest: "99.00".into(),
                waist: "93.00".into(),
                abdomen: "97.00".into(),
                hip: "97.00".into(),
                forearm_r: "28.00".into(),
                forearm_l: "27.00".into(),
                arm_r: "34.00".into(),
                arm_l: "31.00".into(),
                thigh_r: "52.00".into(),
                thigh_l: "51.00".into(),
                calf_r: "37.00".into(),
                calf_l: "37.00".into(),
            }),
            skinfolds: Arc::new(Skinfolds {
                triceps: "19.00".into(),
                subscapular: "26.00".into(),
                suprailiac: "35.00".into(),
                abdominal: "27.00".into(),
                supraspinale: "28.00".into(),
                thigh: "23.00".into(),
                calf: "18.00".into(),
                chest: "12.00".into(),
                midaxillary: "17.00".into(),
                biceps: "4.00".into(),
            }),
            cardio: Arc::new(Cardio {
                resting_hr: "72.0".into(),
                max_hr: "174.0".into(),
                lower_limit_hr: "127.2".into(),
                upper_limit_hr: "158.8".into(),
                recovery_hr: "122.5".into(),
                vo2max: "25.06".into(),
            }),
            neuromuscular: Arc::new(Neuromuscular {
                abdominal_reps: "9".into(),
                abdominal_class: "Médio".into(),
                pushup_reps: "6".into(),
                pushup_class: "Médio".into(),
            }),
            body_comp_assessment: Arc::new(BodyCompAssessment {
                protocol: "Guedes (1985)".into(),
                fat_percentage: "30.31".into(),
                fat_percentage_class: "Média".into(),
            }),
            body_composition: Arc::new(BodyComposition {
                fat_weight: "21.22".into(),
                lean_mass: "48.78".into(),
                current_weight: "70.00".into(),
                desired_weight: "66.00".into(),
            }),
            postural: Arc::new(Postural {
                indication: "treino de segunda a sabado".into(),
            }),
        }
    }
}
