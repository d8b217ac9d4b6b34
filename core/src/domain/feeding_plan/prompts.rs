use crate::domain::feeding_plan::value_objects::GenerateFeedingPlanInput;

const FEEDING_PLAN_TEMPLATE: &str = r#"You are an expert veterinary nutritionist. Your task is to create a detailed daily feeding plan for a dog.

**Dog information:**
*   Name: {dog_name}
*   Breed: {breed}
*   Age: {age_in_months} months
*   Weight: {weight_kg} kg
*   Total daily food amount: {daily_grams} grams

**Instructions:**
1.  **Split the meals:** Based on the age, split the total daily amount ({daily_grams}g) into meals.
    *   Puppies (up to 12 months): 3 meals (breakfast, lunch, dinner).
    *   Adults (over 12 months): 2 meals (breakfast, dinner).
2.  **Set times:** Suggest consistent times for each meal in HH:MM format.
3.  **Compute portions:** Give the amount in grams for each meal. The portions must add up exactly to the total daily amount.
4.  **Write recommendations:** Give 3-4 short, useful tips as a list of strings.
    *   **Mandatory weighing tip:** {weighing_rule}
    *   **Other tips:** Include a tip about always keeping fresh, clean water available, and mention that the food type (puppy, adult, senior) must suit the dog's age.
5.  **Output format:** Return the data strictly in the JSON format of the response schema, with the recommendations as an array of strings.

Run the task for the dog above."#;

pub fn render_feeding_plan_prompt(input: &GenerateFeedingPlanInput) -> String {
    let weighing_rule = if input.age_in_months <= 12.0 {
        "The dog is a puppy, so recommend weighing it every week."
    } else {
        "The dog is an adult, so recommend weighing it once a month."
    };

    FEEDING_PLAN_TEMPLATE
        .replace("{dog_name}", &input.dog_name)
        .replace("{breed}", &input.breed)
        .replace("{age_in_months}", &input.age_in_months.to_string())
        .replace("{weight_kg}", &input.weight_kg.to_string())
        .replace("{daily_grams}", &input.daily_grams.to_string())
        .replace("{weighing_rule}", weighing_rule)
}
