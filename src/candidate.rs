//! Candidate name updates: fetch the candidate, then partial-update the
//! linked profile's full name.

use crate::error::RecopsError;
use crate::platform::PlatformClient;

/// Rename a candidate via their profile.
///
/// Fails distinctly when the candidate is missing and when the candidate
/// has no linked profile; an error status from the profile update surfaces
/// the server body.
pub async fn update_candidate_name(
    client: &PlatformClient,
    candidate_id: &str,
    new_name: &str,
) -> Result<(), RecopsError> {
    let candidate = client
        .get_candidate(candidate_id)
        .await?
        .ok_or_else(|| RecopsError::CandidateNotFound(candidate_id.to_string()))?;

    if candidate.candidate_profile_id.is_empty() {
        return Err(RecopsError::NoCandidateProfile(candidate.id));
    }

    client
        .update_profile_name(&candidate.candidate_profile_id, new_name)
        .await?;
    Ok(())
}
