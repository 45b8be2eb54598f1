use std::collections::BTreeSet;

use crate::{
    Catalog, Category, Difficulty, ExerciseDefinition, ExerciseTemplate, MuscleGroup,
};

/// The exercise catalog shipped with the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl Catalog for BuiltinCatalog {
    fn all(&self) -> Vec<&ExerciseDefinition> {
        EXERCISES.iter().collect()
    }
}

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    category: Category,
    muscle_groups: &'static [MuscleGroup],
    difficulty: Difficulty,
    description: &'static str,
    instructions: &'static [&'static str],
    calories_per_minute: f64,
    template: ExerciseTemplate,
}

impl From<&BaseExercise> for ExerciseDefinition {
    fn from(value: &BaseExercise) -> Self {
        ExerciseDefinition {
            id: value.id.into(),
            name: value.name.to_string(),
            description: value.description.to_string(),
            instructions: value.instructions.iter().map(ToString::to_string).collect(),
            category: value.category,
            muscle_groups: value.muscle_groups.iter().copied().collect::<BTreeSet<_>>(),
            difficulty: value.difficulty,
            calories_per_minute: value.calories_per_minute,
            template: value.template,
        }
    }
}

pub(crate) static EXERCISES: std::sync::LazyLock<Vec<ExerciseDefinition>> =
    std::sync::LazyLock::new(|| BASE_EXERCISES.iter().map(ExerciseDefinition::from).collect());

const BASE_EXERCISES: [BaseExercise; 12] = [
    BaseExercise {
        id: "1",
        name: "Push-ups",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
        difficulty: Difficulty::Beginner,
        description: "A classic bodyweight exercise that targets the chest, shoulders, and triceps.",
        instructions: &[
            "Start in a plank position with hands slightly wider than shoulder-width apart",
            "Lower your body until your chest nearly touches the floor",
            "Push yourself back up to the starting position",
            "Keep your body in a straight line throughout the movement",
        ],
        calories_per_minute: 8.0,
        template: ExerciseTemplate::discrete(3, 10),
    },
    BaseExercise {
        id: "2",
        name: "Squats",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Core],
        difficulty: Difficulty::Beginner,
        description: "A fundamental lower body exercise that targets the quadriceps, hamstrings, and glutes.",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower your body by bending your knees and pushing your hips back",
            "Keep your chest up and back straight",
            "Lower until thighs are parallel to the ground, then return to standing",
        ],
        calories_per_minute: 8.0,
        template: ExerciseTemplate::discrete(3, 15),
    },
    BaseExercise {
        id: "3",
        name: "Running",
        category: Category::Cardio,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Cardio],
        difficulty: Difficulty::Intermediate,
        description: "A high-impact cardio exercise that improves endurance and burns calories.",
        instructions: &[
            "Start with a proper warm-up",
            "Maintain good posture with a slight forward lean",
            "Land midfoot and roll through to the toes",
            "Keep a consistent pace for your desired duration",
        ],
        calories_per_minute: 12.0,
        template: ExerciseTemplate::continuous(30.0, Some(5.0)),
    },
    BaseExercise {
        id: "4",
        name: "Plank",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Core, MuscleGroup::Shoulders],
        difficulty: Difficulty::Beginner,
        description: "An isometric core exercise that also engages the shoulders and back.",
        instructions: &[
            "Start in a forearm plank position with elbows directly beneath shoulders",
            "Keep your body in a straight line from head to heels",
            "Engage your core and glutes",
            "Hold the position for the desired duration",
        ],
        calories_per_minute: 5.0,
        template: ExerciseTemplate::continuous(1.0, None),
    },
    BaseExercise {
        id: "5",
        name: "Pull-ups",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        difficulty: Difficulty::Advanced,
        description: "An upper body compound exercise that primarily targets the back and biceps.",
        instructions: &[
            "Hang from a pull-up bar with hands slightly wider than shoulder-width apart",
            "Pull your body up until your chin clears the bar",
            "Lower yourself back down with control",
            "Repeat for the desired number of repetitions",
        ],
        calories_per_minute: 10.0,
        template: ExerciseTemplate::discrete(3, 8),
    },
    BaseExercise {
        id: "6",
        name: "Cycling",
        category: Category::Cardio,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Cardio],
        difficulty: Difficulty::Intermediate,
        description: "A low-impact cardio exercise that strengthens the lower body and improves cardiovascular health.",
        instructions: &[
            "Adjust the bike to fit your body properly",
            "Maintain a steady cadence",
            "Keep your core engaged and back straight",
            "Vary intensity for interval training",
        ],
        calories_per_minute: 10.0,
        template: ExerciseTemplate::continuous(45.0, Some(15.0)),
    },
    BaseExercise {
        id: "7",
        name: "Lunges",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Legs],
        difficulty: Difficulty::Intermediate,
        description: "A unilateral lower body exercise that targets the quadriceps, hamstrings, and glutes.",
        instructions: &[
            "Stand with feet hip-width apart",
            "Step forward with one leg and lower your body until both knees are bent at 90 degrees",
            "Push back up to the starting position",
            "Alternate legs for the desired number of repetitions",
        ],
        calories_per_minute: 7.0,
        template: ExerciseTemplate::discrete(3, 12),
    },
    BaseExercise {
        id: "8",
        name: "Yoga Flow",
        category: Category::Yoga,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Core],
        difficulty: Difficulty::Beginner,
        description: "A sequence of yoga poses that improve flexibility, balance, and mindfulness.",
        instructions: &[
            "Begin with a few minutes of deep breathing",
            "Move through a sequence of poses, holding each for several breaths",
            "Focus on proper alignment and breathing",
            "End with a relaxation pose",
        ],
        calories_per_minute: 4.0,
        template: ExerciseTemplate::continuous(30.0, None),
    },
    BaseExercise {
        id: "9",
        name: "Burpees",
        category: Category::Hiit,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Cardio],
        difficulty: Difficulty::Advanced,
        description: "A high-intensity full-body exercise that combines a squat, push-up, and jump.",
        instructions: &[
            "Start in a standing position",
            "Drop into a squat position and place hands on the ground",
            "Kick feet back into a plank position and perform a push-up",
            "Return feet to squat position and jump up explosively",
        ],
        calories_per_minute: 15.0,
        template: ExerciseTemplate::discrete(3, 10),
    },
    BaseExercise {
        id: "10",
        name: "Dumbbell Rows",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        difficulty: Difficulty::Intermediate,
        description: "A unilateral back exercise that targets the latissimus dorsi and rhomboids.",
        instructions: &[
            "Place one knee and hand on a bench, keeping your back flat",
            "Hold a dumbbell in your free hand, arm extended",
            "Pull the dumbbell up to your hip, keeping your elbow close to your body",
            "Lower the dumbbell with control and repeat",
        ],
        calories_per_minute: 7.0,
        template: ExerciseTemplate::discrete(3, 12),
    },
    BaseExercise {
        id: "11",
        name: "Jump Rope",
        category: Category::Cardio,
        muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Cardio],
        difficulty: Difficulty::Beginner,
        description: "A simple but effective cardio exercise that improves coordination and burns calories.",
        instructions: &[
            "Hold the handles with a firm grip and position the rope behind you",
            "Swing the rope over your head and jump as it approaches your feet",
            "Keep your jumps small and stay on the balls of your feet",
            "Maintain a consistent rhythm",
        ],
        calories_per_minute: 11.0,
        template: ExerciseTemplate::continuous(15.0, None),
    },
    BaseExercise {
        id: "12",
        name: "Deadlifts",
        category: Category::Strength,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Legs],
        difficulty: Difficulty::Advanced,
        description: "A compound strength exercise that targets multiple muscle groups, particularly the posterior chain.",
        instructions: &[
            "Stand with feet hip-width apart, barbell over midfoot",
            "Bend at the hips and knees to grip the bar with hands shoulder-width apart",
            "Lift the bar by extending hips and knees, keeping back straight",
            "Return the bar to the ground with control",
        ],
        calories_per_minute: 9.0,
        template: ExerciseTemplate::discrete(3, 8),
    },
];
