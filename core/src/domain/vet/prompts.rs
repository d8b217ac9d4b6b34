use crate::domain::vet::value_objects::MAX_VET_RESULTS;

const VET_SEARCH_TEMPLATE: &str = r#"You are a local search assistant. Your task is to find veterinary clinics and 24-hour veterinary hospitals in the city given by the user.

**City to search:**
{city}

**Instructions:**
1.  **Prefer 24 hours:** Give preference to clinics and hospitals open 24 hours.
2.  **Be accurate:** Only list clinics you have up-to-date, reliable information about.
3.  **Output format:** Return a list of up to {max_results} clinics. For each clinic give the name, the full address and, when possible, the phone number.
4.  **JSON structure:** Return the data strictly in the JSON format of the response schema. If no clinic is found, return an empty 'vets' array.

Run the search for the city above."#;

pub fn render_vet_search_prompt(city: &str) -> String {
    VET_SEARCH_TEMPLATE
        .replace("{city}", city)
        .replace("{max_results}", &MAX_VET_RESULTS.to_string())
}
