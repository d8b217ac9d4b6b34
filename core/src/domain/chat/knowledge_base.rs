use crate::domain::chat::entities::{KnowledgeTopic, QuickAnswer};

struct BreedNote {
    name: &'static str,
    aliases: &'static [&'static str],
    diet: &'static str,
    tip: &'static str,
}

struct SizeNote {
    size: &'static str,
    diet: &'static str,
    tip: &'static str,
}

struct Faq {
    keywords: &'static [&'static str],
    answer: &'static str,
}

const BREED_NOTES: &[BreedNote] = &[
    BreedNote {
        name: "Labrador Retriever",
        aliases: &["labrador"],
        diet: "High quality food with 25-30% protein and 12-15% fat. 800-1200 g/day depending on weight and activity.",
        tip: "Control portions to avoid obesity. Omega-3 helps the coat.",
    },
    BreedNote {
        name: "German Shepherd",
        aliases: &["pastor alemao", "pastor alemão"],
        diet: "Premium food with 22-28% protein and fiber for digestion. 600-1000 g/day for active adults.",
        tip: "Watch for joint problems; glucosamine can help.",
    },
    BreedNote {
        name: "Bulldog",
        aliases: &[],
        diet: "Low fat (10-12%), highly digestible food. 400-600 g/day, adjusted to weight.",
        tip: "Avoid foods that trigger allergies, such as wheat or soy.",
    },
    BreedNote {
        name: "Poodle",
        aliases: &[],
        diet: "Food with 25% protein and 15% fat. 200-500 g/day depending on size (toy, miniature, standard).",
        tip: "Skin and coat supplements are recommended.",
    },
    BreedNote {
        name: "Golden Retriever",
        aliases: &["golden"],
        diet: "Balanced food with 20-25% protein and 12-15% fat. 700-1100 g/day for adults.",
        tip: "Great for activities like swimming; avoid overfeeding.",
    },
    BreedNote {
        name: "Beagle",
        aliases: &[],
        diet: "Food with 20-25% protein and moderate calories. 300-500 g/day, adjusted to weight.",
        tip: "Prone to obesity; control portions and provide exercise.",
    },
    BreedNote {
        name: "Chihuahua",
        aliases: &[],
        diet: "Small breed food with 25-30% protein. 100-200 g/day depending on weight.",
        tip: "Avoid fatty foods because of the fast metabolism.",
    },
    BreedNote {
        name: "Rottweiler",
        aliases: &[],
        diet: "Food with 24-28% protein and joint support. 800-1200 g/day for active adults.",
        tip: "Training and socialization are essential; avoid obesity.",
    },
    BreedNote {
        name: "Border Collie",
        aliases: &[],
        diet: "Food with 25-30% protein for high energy. 500-800 g/day depending on activity.",
        tip: "Needs mental and physical stimulation and an energy-dense diet.",
    },
    BreedNote {
        name: "Caramelo",
        aliases: &["mixed breed", "mutt"],
        diet: "Balanced food with 20-25% protein. 400-700 g/day, adjusted to weight.",
        tip: "Resilient, but watch digestion when the diet changes.",
    },
];

const FAQS: &[Faq] = &[
    Faq {
        keywords: &["best food", "which food", "ideal food"],
        answer: "The best food depends on your dog's breed, age, weight and activity level. Large breeds like the Labrador need more protein (25-30%), while small breeds like the Chihuahua do better on lower calorie food. Always choose premium food and consult a veterinarian.",
    },
    Faq {
        keywords: &["how many times", "times a day", "times per day", "how often"],
        answer: "Puppies (up to 6 months) eat 3-4 times a day. Adult dogs eat 1-2 times a day, depending on breed and routine. Split the recommended daily amount to avoid digestive problems.",
    },
    Faq {
        keywords: &["homemade", "home-cooked", "home cooked"],
        answer: "Homemade food can be an option, but it must be balanced with protein, carbohydrates and vegetables, without seasoning, salt or toxic foods (such as onion, garlic, chocolate). Consult a veterinarian to put together a suitable diet.",
    },
    Faq {
        keywords: &["toxic", "dangerous food", "can't eat", "cannot eat"],
        answer: "Toxic foods include chocolate, grapes, raisins, onion, garlic, avocado, macadamia nuts and xylitol (sweetener). Avoid cooked bones, which can splinter and cause obstructions.",
    },
    Faq {
        keywords: &["overweight", "fat dog", "dog's weight"],
        answer: "Check whether you can feel your dog's ribs with light pressure. If the waist is barely visible or the belly sticks out, your dog may be overweight. Consult a veterinarian to adjust the diet.",
    },
    Faq {
        keywords: &["won't eat", "not eating", "refuses food", "no appetite"],
        answer: "Refusing food can have many causes. First check for changes in routine or stress. You can try mixing in some wet food or unseasoned chicken broth to make the meal more appealing.\n\nHowever, lack of appetite can be a sign of health problems. If it lasts more than 24 hours, or comes with other symptoms such as vomiting, diarrhea or lethargy, **see a veterinarian immediately**.",
    },
    Faq {
        keywords: &["bone"],
        answer: "Giving bones to dogs is not recommended, especially cooked ones, because they can splinter and cause perforations, choking and dental problems. Raw bones also carry a risk of bacterial contamination such as Salmonella.\n\n**Safe alternatives:** nylon toys or recreational bones made of safe materials, always under supervision.\n\n**Important:** always consult a veterinarian before offering any kind of bone. If your dog swallows one and shows symptoms (vomiting, diarrhea), seek professional help immediately.",
    },
];

const SIZE_NOTES: &[SizeNote] = &[
    SizeNote {
        size: "small",
        diet: "Small breed food with 25-30% protein and moderate calories. 100-400 g/day depending on weight.",
        tip: "Avoid overfeeding; small breeds have a fast metabolism.",
    },
    SizeNote {
        size: "medium",
        diet: "Balanced food with 20-25% protein and 10-15% fat. 400-800 g/day depending on weight and activity.",
        tip: "Monitor weight to avoid obesity; moderate exercise is ideal.",
    },
    SizeNote {
        size: "large",
        diet: "Food with 22-28% protein and joint support. 600-1200 g/day depending on weight and activity.",
        tip: "Supplements such as glucosamine help large breeds.",
    },
];

const FALLBACK_ANSWER: &str =
    "Sorry, I can't answer that yet. Try rephrasing the question or talk to a veterinarian.";

/// Safety facts the assistant must never contradict.
pub const SAFETY_FACTS: &[&str] = &[
    "Bones: giving bones is not recommended, especially cooked ones, as they can splinter and cause perforations, choking and dental problems. Raw bones carry a risk of bacterial contamination. Safe alternatives are nylon toys or recreational bones made of safe materials, always under supervision.",
    "If the dog won't eat: refusing food can have many causes (stress, change of routine). Try mixing in wet food or unseasoned chicken broth. If the refusal lasts more than 24 hours or comes with other symptoms (vomiting, diarrhea, lethargy), the dog must see a veterinarian immediately.",
    "Feeding frequency: puppies (up to 6 months) eat 3-4 times a day. Adults eat 1-2 times.",
    "Homemade food must be balanced by a veterinarian, avoiding seasoning and toxic foods (onion, garlic, chocolate, grapes).",
    "Toxic foods: chocolate, grapes, raisins, onion, garlic, avocado, macadamia and xylitol are dangerous.",
    "Overweight: if you cannot feel the dog's ribs with light pressure, it may be overweight. Consult a veterinarian.",
];

/// Keyword responder over built-in breed notes, frequent questions and size guidance.
///
/// Lookup order is fixed: breed names first, then frequent questions, then sizes.
/// Anything else gets a fallback answer pointing at a veterinarian.
#[derive(Debug, Default, Clone, Copy)]
pub struct KnowledgeBase;

impl KnowledgeBase {
    pub fn answer(&self, question: &str) -> QuickAnswer {
        let input = question.to_lowercase();

        if let Some(note) = BREED_NOTES.iter().find(|note| {
            input.contains(&note.name.to_lowercase())
                || note.aliases.iter().any(|alias| input.contains(alias))
        }) {
            return QuickAnswer {
                answer: format!("About the {}: {} Tip: {}", note.name, note.diet, note.tip),
                topic: KnowledgeTopic::Breed,
            };
        }

        if let Some(faq) = FAQS
            .iter()
            .find(|faq| faq.keywords.iter().any(|keyword| input.contains(keyword)))
        {
            return QuickAnswer {
                answer: faq.answer.to_string(),
                topic: KnowledgeTopic::Faq,
            };
        }

        if let Some(note) = SIZE_NOTES.iter().find(|note| input.contains(note.size)) {
            return QuickAnswer {
                answer: format!("For {} dogs: {} Tip: {}", note.size, note.diet, note.tip),
                topic: KnowledgeTopic::Size,
            };
        }

        QuickAnswer {
            answer: FALLBACK_ANSWER.to_string(),
            topic: KnowledgeTopic::Fallback,
        }
    }

    /// Short per-breed diet lines for the assistant prompt.
    pub fn breed_summaries(&self) -> impl Iterator<Item = String> {
        BREED_NOTES
            .iter()
            .map(|note| format!("{}: {}", note.name, note.diet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_answer() {
        let answer = KnowledgeBase.answer("What is the best diet for a Labrador?");
        assert_eq!(answer.topic, KnowledgeTopic::Breed);
        assert!(answer.answer.starts_with("About the Labrador Retriever:"));
    }

    #[test]
    fn test_breed_matched_before_faq() {
        let answer = KnowledgeBase.answer("Can my beagle have a bone?");
        assert_eq!(answer.topic, KnowledgeTopic::Breed);
        assert!(answer.answer.contains("Beagle"));
    }

    #[test]
    fn test_faq_matched_before_size() {
        let answer = KnowledgeBase.answer("How many times should I feed a large dog?");
        assert_eq!(answer.topic, KnowledgeTopic::Faq);
        assert!(answer.answer.starts_with("Puppies (up to 6 months)"));
    }

    #[test]
    fn test_faq_keywords() {
        let answer = KnowledgeBase.answer("My dog WON'T EAT anything");
        assert_eq!(answer.topic, KnowledgeTopic::Faq);
        assert!(answer.answer.contains("24 hours"));

        let answer = KnowledgeBase.answer("Are bones safe?");
        assert_eq!(answer.topic, KnowledgeTopic::Faq);
        assert!(answer.answer.contains("not recommended"));
    }

    #[test]
    fn test_size_answer() {
        let answer = KnowledgeBase.answer("Tips for small dogs?");
        assert_eq!(answer.topic, KnowledgeTopic::Size);
        assert!(answer.answer.starts_with("For small dogs:"));
    }

    #[test]
    fn test_fallback() {
        let answer = KnowledgeBase.answer("Do cats like lasagna?");
        assert_eq!(answer.topic, KnowledgeTopic::Fallback);
        assert_eq!(answer.answer, FALLBACK_ANSWER);
    }
}
