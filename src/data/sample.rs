//! Synthetic applicant profiles.
//!
//! Profiles are drawn around the marginal statistics of the admissions dataset
//! the coefficients were fitted on. A shared latent "strength" factor makes
//! the scores positively correlated, the way real applicants' scores are.
//! Every draw is clamped and rounded into the field domains, so generated
//! profiles always validate.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{
    AdmissionProfile, CGPA_RANGE, FieldRange, GRE_RANGE, LOR_RANGE, RATING_RANGE, SOP_RANGE,
    TOEFL_RANGE,
};
use crate::error::AppError;

/// Correlation of each score with the latent strength factor.
const LOADING: f64 = 0.8;

/// Share of applicants with research experience.
const RESEARCH_SHARE: f64 = 0.56;

/// `(range, mean, std dev)` per numeric field.
const MARGINALS: [(FieldRange, f64, f64); 6] = [
    (GRE_RANGE, 316.5, 11.3),
    (TOEFL_RANGE, 107.2, 6.1),
    (RATING_RANGE, 3.1, 1.1),
    (SOP_RANGE, 3.4, 1.0),
    (LOR_RANGE, 3.5, 0.9),
    (CGPA_RANGE, 8.58, 0.60),
];

/// Options for sample generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
}

/// A generated profile with a stable id.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleProfile {
    pub id: String,
    pub profile: AdmissionProfile,
}

/// Generate `config.count` profiles. Same seed, same profiles.
pub fn generate_profiles(config: &SampleConfig) -> Result<Vec<SampleProfile>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;
    let idiosyncratic = (1.0 - LOADING * LOADING).sqrt();

    let mut out = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let strength: f64 = normal.sample(&mut rng);
        let mut draws = [0.0; 6];
        for (slot, (range, mean, sd)) in draws.iter_mut().zip(MARGINALS) {
            let z = LOADING * strength + idiosyncratic * normal.sample(&mut rng);
            *slot = (mean + sd * z).clamp(range.min, range.max);
        }
        let [gre, toefl, rating, sop, lor, cgpa] = draws;

        let profile = AdmissionProfile {
            gre: gre.round() as u16,
            toefl: toefl.round() as u16,
            university_rating: rating.round() as u8,
            sop: sop.round() as u8,
            lor: lor.round() as u8,
            cgpa: round_to(cgpa, 2).clamp(CGPA_RANGE.min, CGPA_RANGE.max),
            research: rng.gen_bool(RESEARCH_SHARE),
        };

        out.push(SampleProfile {
            id: format!("S-{:04}", i + 1),
            profile,
        });
    }

    Ok(out)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_profiles_validate() {
        let profiles = generate_profiles(&SampleConfig { count: 500, seed: 7 }).unwrap();
        assert_eq!(profiles.len(), 500);
        for s in &profiles {
            s.profile.validate().unwrap();
        }
        assert_eq!(profiles[0].id, "S-0001");
    }

    #[test]
    fn same_seed_same_profiles() {
        let config = SampleConfig { count: 20, seed: 42 };
        assert_eq!(generate_profiles(&config).unwrap(), generate_profiles(&config).unwrap());

        let other = SampleConfig { count: 20, seed: 43 };
        assert_ne!(generate_profiles(&config).unwrap(), generate_profiles(&other).unwrap());
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = generate_profiles(&SampleConfig { count: 0, seed: 1 }).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn scores_are_positively_correlated() {
        let profiles = generate_profiles(&SampleConfig { count: 2000, seed: 11 }).unwrap();
        let n = profiles.len() as f64;
        let xs: Vec<f64> = profiles.iter().map(|s| f64::from(s.profile.gre)).collect();
        let ys: Vec<f64> = profiles.iter().map(|s| s.profile.cgpa).collect();
        let mx = xs.iter().sum::<f64>() / n;
        let my = ys.iter().sum::<f64>() / n;
        let cov: f64 = xs.iter().zip(&ys).map(|(x, y)| (x - mx) * (y - my)).sum::<f64>();
        assert!(cov > 0.0);
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(8.567, 2), 8.57);
        assert_eq!(round_to(9.921, 2), 9.92);
    }
}
