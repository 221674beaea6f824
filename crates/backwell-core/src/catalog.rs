//! Static 28-day program catalog.
//!
//! Four weeks of content: Foundation (1-7), Strengthen (8-14), Mobilize
//! (15-21), Sustain (22-28). The catalog is authored in code and built
//! once; callers get `'static` references.

use std::sync::OnceLock;

use crate::program::{DayProgram, Exercise, MentalKind, MentalSegment};

/// Length of the challenge in days.
pub const TOTAL_DAYS: u32 = 28;

/// All day programs, ordered by day number.
pub fn all_days() -> &'static [DayProgram] {
    static DAYS: OnceLock<Vec<DayProgram>> = OnceLock::new();
    DAYS.get_or_init(build_days)
}

/// Look up the program for a day number. `None` if out of range.
pub fn day(n: u32) -> Option<&'static DayProgram> {
    all_days().iter().find(|p| p.day == n)
}

fn exercise(name: &str, secs: u32, instructions: &[&str], icon: &str, focus: &str) -> Exercise {
    Exercise {
        name: name.into(),
        duration_secs: secs,
        instructions: instructions.iter().map(|s| (*s).into()).collect(),
        icon: icon.into(),
        focus_area: focus.into(),
    }
}

fn mental(kind: MentalKind, secs: u32, guidance: &str) -> MentalSegment {
    MentalSegment {
        kind,
        duration_secs: secs,
        guidance: guidance.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn program(
    day: u32,
    title: &str,
    theme: &str,
    mental_focus: &str,
    exercises: Vec<Exercise>,
    mental_segments: Vec<MentalSegment>,
    completion_message: &str,
) -> DayProgram {
    DayProgram {
        day,
        title: title.into(),
        theme: theme.into(),
        mental_focus: mental_focus.into(),
        exercises,
        mental_segments,
        completion_message: completion_message.into(),
    }
}

fn build_days() -> Vec<DayProgram> {
    let mut days = week_one_foundation();
    days.extend(week_two_strengthen());
    days.extend(week_three_mobilize());
    days.extend(week_four_sustain());
    days
}

/// Week 1 (Days 1-7): gentle relief and pain reduction.
fn week_one_foundation() -> Vec<DayProgram> {
    vec![
        program(
            1,
            "Welcome to Relief",
            "Gentle Introduction",
            "Beginning Your Journey",
            vec![
                exercise("Deep Breathing", 60, &["Lie on your back", "Place hands on belly", "Breathe deeply into your abdomen", "Feel your back relax into the floor"], "wind", "Relaxation"),
                exercise("Pelvic Tilts", 45, &["Lie on back, knees bent", "Gently tilt pelvis up", "Press lower back to floor", "Release slowly"], "figure.flexibility", "Lower Back"),
                exercise("Knee to Chest", 30, &["Bring one knee toward chest", "Hold gently", "Keep other leg extended", "Switch sides"], "figure.flexibility", "Lower Back"),
                exercise("Cat-Cow Stretch", 45, &["Start on hands and knees", "Arch back (cow)", "Round back (cat)", "Move slowly and gently"], "figure.yoga", "Spine"),
                exercise("Child's Pose", 60, &["Sit back on heels", "Extend arms forward", "Rest forehead on floor", "Breathe deeply"], "figure.mind.and.body", "Full Spine"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am taking the first step toward healing my back."),
                mental(MentalKind::Breathing, 30, "Breathe in calm, breathe out tension. Follow the rhythm."),
                mental(MentalKind::Reflection, 20, "Notice how your body feels. Where do you sense relief?"),
            ],
            "Day 1 complete! You've started your healing journey. 🌱",
        ),
        program(
            2,
            "Building Awareness",
            "Body Connection",
            "Listening to Your Body",
            vec![
                exercise("Breathing with Awareness", 60, &["Focus on natural breath", "Notice where you feel tension", "Breathe into tight areas", "Release on exhale"], "lungs.fill", "Mind-Body"),
                exercise("Gentle Pelvic Tilts", 45, &["Same as yesterday", "Focus on quality over quantity", "Notice the movement", "Control the pace"], "figure.flexibility", "Lower Back"),
                exercise("Single Knee Rocks", 40, &["Bring knee to chest", "Gently rock side to side", "Massage lower back", "Switch legs"], "figure.flexibility", "Lower Back"),
                exercise("Supine Twist", 35, &["Knees bent, feet flat", "Drop knees to one side", "Keep shoulders down", "Switch sides slowly"], "figure.yoga", "Spine Rotation"),
                exercise("Rest and Breathe", 60, &["Lie flat, body relaxed", "Scan from head to toe", "Notice areas of release", "Breathe naturally"], "figure.mind.and.body", "Recovery"),
            ],
            vec![
                mental(MentalKind::BodyScan, 30, "Scan your body from head to toe. Notice without judgment."),
                mental(MentalKind::Breathing, 30, "Box breathing: In for 4, hold for 4, out for 4, hold for 4."),
                mental(MentalKind::Affirmation, 15, "My body knows how to heal. I am patient with the process."),
            ],
            "Day 2 done! You're building body awareness. 🧘",
        ),
        program(
            3,
            "Gentle Strength",
            "Core Activation",
            "Building Confidence",
            vec![
                exercise("Diaphragmatic Breathing", 60, &["Hand on belly, hand on chest", "Breathe so belly rises first", "Chest stays relatively still", "Strengthen core connection"], "wind", "Core Connection"),
                exercise("Dead Bug Prep", 40, &["Lie on back, knees up", "Hover one foot off floor", "Keep back pressed down", "Alternate legs"], "figure.core.training", "Core"),
                exercise("Bridge Hold", 30, &["Feet flat, knees bent", "Lift hips gently", "Squeeze glutes lightly", "Lower slowly"], "figure.strengthtraining.traditional", "Glutes & Back"),
                exercise("Bird Dog Prep", 35, &["Hands and knees position", "Lift one arm forward", "Keep hips level", "Alternate arms"], "figure.mind.and.body", "Stability"),
                exercise("Restful Recovery", 60, &["Child's pose or back lying", "Deep, slow breaths", "Feel the strength you built", "Rest fully"], "figure.cooldown", "Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am building strength with every gentle movement."),
                mental(MentalKind::Breathing, 30, "Breathe deeply. Feel your core engage naturally with each breath."),
                mental(MentalKind::Reflection, 20, "Notice the difference between Day 1 and today. Progress is happening."),
            ],
            "Day 3 complete! Your core is waking up. 💪",
        ),
        program(
            4,
            "Flow and Release",
            "Movement Medicine",
            "Embracing Movement",
            vec![
                exercise("Breath Flow", 45, &["Match movement to breath", "Inhale as you prepare", "Exhale as you move", "Find your rhythm"], "wind.circle.fill", "Flow State"),
                exercise("Cat-Cow Flow", 60, &["Hands and knees", "Inhale: cow (arch)", "Exhale: cat (round)", "Flow continuously"], "figure.yoga", "Spine Mobility"),
                exercise("Thread the Needle", 40, &["From hands and knees", "Thread one arm under body", "Rest on shoulder", "Gentle twist for each side"], "figure.flexibility", "Upper Back"),
                exercise("Glute Bridges", 35, &["Flow up and down", "Match to breath", "Feel glutes engage", "Control the movement"], "figure.strengthtraining.traditional", "Glutes"),
                exercise("Calming Rest", 60, &["Lie comfortably", "Notice warmth in muscles", "Appreciate your effort", "Breathe gratitude"], "heart.fill", "Gratitude"),
            ],
            vec![
                mental(MentalKind::Breathing, 30, "4-7-8 breathing: In for 4, hold for 7, out for 8. Deeply calming."),
                mental(MentalKind::Affirmation, 15, "Movement is medicine. My body is healing with each flow."),
                mental(MentalKind::BodyScan, 25, "Where do you feel warmth? That's your body healing itself."),
            ],
            "Day 4 mastered! You're finding your flow. 🌊",
        ),
        program(
            5,
            "Opening Up",
            "Hip Release",
            "Letting Go",
            vec![
                exercise("Mindful Breathing", 45, &["Breathe into your hips", "Imagine tension melting", "Each exhale releases more", "Feel the opening"], "wind", "Hip Awareness"),
                exercise("Figure 4 Stretch", 50, &["Ankle over opposite knee", "Gently pull leg toward chest", "Feel hip opening", "Switch sides"], "figure.flexibility", "Hips"),
                exercise("Knee Rocks", 40, &["Both knees to chest", "Rock gently side to side", "Massage lower back", "Stay relaxed"], "figure.yoga", "Lower Back"),
                exercise("Happy Baby Pose", 45, &["Hold outside of feet", "Knees wide", "Gently rock", "Smile and breathe"], "figure.mind.and.body", "Hips & Lower Back"),
                exercise("Integration Rest", 60, &["Legs extended or bent", "Feel the openness created", "Body is spacious", "Rest in this feeling"], "sparkles", "Integration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I release what no longer serves me. My body is opening."),
                mental(MentalKind::Breathing, 30, "Exhale tension. Inhale space. Let go with every breath."),
                mental(MentalKind::Reflection, 25, "What are you ready to let go of? Physical tension? Mental worry?"),
            ],
            "Day 5 done! You're creating space for healing. ✨",
        ),
        program(
            6,
            "Core Connection",
            "Stability Building",
            "Inner Strength",
            vec![
                exercise("Core Breathing", 45, &["Feel core engage on exhale", "Gentle, not forced", "Connection, not tension", "Build awareness"], "wind.circle", "Core"),
                exercise("Dead Bug", 45, &["Opposite arm and leg extend", "Keep back pressed down", "Move with control", "Alternate slowly"], "figure.core.training", "Core Stability"),
                exercise("Bird Dog", 45, &["Opposite arm and leg lift", "Stay balanced", "Keep hips level", "Quality over speed"], "figure.mind.and.body", "Back Stability"),
                exercise("Plank Hold (Knees)", 20, &["Forearms down, knees down", "Straight line from knees to head", "Breathe steadily", "Hold strong"], "figure.strengthtraining.traditional", "Full Core"),
                exercise("Child's Pose Recovery", 60, &["Rest completely", "Feel your new strength", "Breathe appreciation", "Honor your effort"], "figure.cooldown", "Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am stronger than I was yesterday. My core supports me."),
                mental(MentalKind::Breathing, 30, "Power breath: Strong inhale through nose, powerful exhale through mouth."),
                mental(MentalKind::BodyScan, 25, "Feel the strength in your center. This is your foundation."),
            ],
            "Day 6 complete! Your core is getting stronger. 🔥",
        ),
        program(
            7,
            "Week One Victory",
            "Integration & Rest",
            "Celebrating Progress",
            vec![
                exercise("Gratitude Breathing", 60, &["Breathe in: 'I am grateful'", "Breathe out: 'I am healing'", "Feel the truth of this", "Celebrate yourself"], "heart.circle.fill", "Gratitude"),
                exercise("Gentle Flow", 60, &["Cat-cow at your pace", "Pelvic tilts", "Child's pose", "Move intuitively"], "figure.yoga", "Full Body"),
                exercise("Hip Openers", 50, &["Figure 4 both sides", "Knee rocks", "Happy baby", "Feel the release"], "figure.flexibility", "Hips"),
                exercise("Core Check-In", 40, &["Brief dead bug", "Quick bird dog", "Short bridge hold", "Notice the difference"], "figure.core.training", "Core"),
                exercise("Savasana (Deep Rest)", 90, &["Lie completely still", "Scan your whole body", "Notice all the changes", "Rest in your achievement"], "sparkles", "Recovery & Integration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 20, "I completed Week 1. I am committed to my healing journey."),
                mental(MentalKind::Reflection, 40, "Reflect on this week. What changed? What surprised you? What are you proud of?"),
                mental(MentalKind::Breathing, 30, "Celebrating breath: Breathe in joy, breathe out any remaining doubt."),
            ],
            "WEEK 1 COMPLETE! You showed up for yourself every day. 🎉",
        ),
    ]
}

/// Week 2 (Days 8-14): building core strength and stability.
fn week_two_strengthen() -> Vec<DayProgram> {
    vec![
        program(
            8,
            "Level Up",
            "Progressive Strength",
            "Embracing Challenge",
            vec![
                exercise("Power Breathing", 45, &["Strong, controlled breaths", "Feel your power", "Energy building", "Confidence growing"], "wind.snow", "Energy"),
                exercise("Advanced Dead Bug", 50, &["Lower arm and leg together", "Controlled movement", "Back stays down", "Full range of motion"], "figure.core.training", "Core"),
                exercise("Bird Dog with Hold", 45, &["Extend and hold for 5 seconds", "Perfect balance", "Alternate sides", "Stay strong"], "figure.mind.and.body", "Stability"),
                exercise("Bridge March", 45, &["Hold bridge position", "Lift one foot slightly", "Alternate legs", "Hips stay level"], "figure.strengthtraining.traditional", "Glutes & Stability"),
                exercise("Recovery Flow", 60, &["Child's pose", "Gentle stretches", "Feel the strength", "Rest proud"], "figure.cooldown", "Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I welcome challenge. I am capable of more than I thought."),
                mental(MentalKind::Breathing, 30, "Breath of strength: Inhale power, exhale limitation."),
                mental(MentalKind::Reflection, 20, "Notice what feels easier than last week. That's progress."),
            ],
            "Day 8 crushed! Week 2 has begun strong. 💪",
        ),
        program(
            9,
            "Postural Power",
            "Alignment Focus",
            "Standing Tall",
            vec![
                exercise("Posture Awareness Breathing", 45, &["Sit or stand tall", "Breathe into good posture", "Shoulders back and down", "Feel your spine lengthen"], "figure.stand", "Posture"),
                exercise("Wall Angels", 50, &["Back against wall", "Arms slide up and down", "Maintain contact with wall", "Open chest and shoulders"], "figure.flexibility", "Upper Back"),
                exercise("Prone Cobra", 30, &["Lie face down", "Lift chest slightly", "Squeeze shoulder blades", "Strengthen upper back"], "figure.strengthtraining.traditional", "Upper Back"),
                exercise("Quadruped Thoracic Rotation", 45, &["Hands and knees", "Hand behind head", "Rotate torso open", "Improve spine rotation"], "figure.yoga", "Thoracic Spine"),
                exercise("Postural Reset", 60, &["Stand tall or sit tall", "Scan your alignment", "Breathe into length", "Embody good posture"], "figure.stand.line.dotted.figure.stand", "Integration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I carry myself with strength and grace. My posture reflects my confidence."),
                mental(MentalKind::BodyScan, 30, "Scan from feet to crown. Where can you create more space?"),
                mental(MentalKind::Breathing, 25, "Tall breath: Inhale and grow taller, exhale and maintain height."),
            ],
            "Day 9 done! Standing taller already. 🌟",
        ),
        program(
            10,
            "Dynamic Stability",
            "Controlled Movement",
            "Grace Under Pressure",
            vec![
                exercise("Mindful Movement Prep", 40, &["Center yourself", "Feel grounded", "Prepare to move with control", "Breathe confidence"], "figure.mind.and.body", "Centering"),
                exercise("Single Leg Bridge", 50, &["Bridge with one leg extended", "Hold stable", "Glutes engaged", "Alternate legs"], "figure.strengthtraining.traditional", "Glutes & Balance"),
                exercise("Plank to Down Dog", 45, &["From plank (knees optional)", "Push back to down dog", "Return to plank", "Controlled flow"], "figure.yoga", "Full Body"),
                exercise("Side Plank (Knees)", 30, &["Side plank from knees", "Hold stable", "Breathe steadily", "Both sides"], "figure.core.training", "Obliques"),
                exercise("Constructive Rest", 60, &["Knees bent, feet flat", "Arms at sides", "Full body relaxation", "Integrate the work"], "figure.cooldown", "Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am balanced and stable. I move through life with grace."),
                mental(MentalKind::Breathing, 30, "Balance breath: Equal inhale and exhale. Find equilibrium."),
                mental(MentalKind::Reflection, 20, "How does your improved stability feel in daily life?"),
            ],
            "Day 10 complete! Finding your balance. ⚖️",
        ),
        program(
            11,
            "Endurance Builder",
            "Sustained Strength",
            "Mental Toughness",
            vec![
                exercise("Endurance Breathing", 45, &["Steady, rhythmic breath", "Build mental stamina", "Consistent pace", "Prepare for challenge"], "wind", "Mental Prep"),
                exercise("Extended Plank Hold", 40, &["Knees or toes", "Hold with good form", "Breathe through it", "Mental strength building"], "figure.strengthtraining.traditional", "Core Endurance"),
                exercise("Wall Sit", 45, &["Back against wall", "Knees at 90 degrees", "Hold position", "Legs building strength"], "figure.flexibility", "Leg Strength"),
                exercise("Superman Hold", 30, &["Lie face down", "Lift arms and legs", "Hold the position", "Back extension strength"], "figure.core.training", "Back Strength"),
                exercise("Deep Recovery", 90, &["You earned this rest", "Muscles recovering", "Strength is building", "Honor your effort"], "heart.fill", "Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am mentally tough. I push through when it gets hard."),
                mental(MentalKind::Breathing, 30, "Warrior breath: Strong inhales, powerful exhales. You are a warrior."),
                mental(MentalKind::BodyScan, 25, "Feel the burn becoming strength. That's transformation."),
            ],
            "Day 11 conquered! Your endurance is growing. 🔥",
        ),
        program(
            12,
            "Functional Movement",
            "Real-World Strength",
            "Practical Power",
            vec![
                exercise("Functional Breathing", 40, &["Breathe as you move", "Natural rhythm", "Real-world connection", "Movement is life"], "wind.circle", "Integration"),
                exercise("Squat to Stand", 50, &["From chair or bench", "Stand up fully", "Sit down controlled", "Daily life movement"], "figure.strengthtraining.functional", "Legs & Back"),
                exercise("Bent-Over Row (No Weight)", 45, &["Hinge at hips", "Pull elbows back", "Squeeze shoulder blades", "Upper back strength"], "figure.strengthtraining.traditional", "Upper Back"),
                exercise("Rotational Reaches", 45, &["Controlled trunk rotation", "Reach across body", "Functional spine movement", "Both directions"], "figure.core.training", "Rotational Strength"),
                exercise("Standing Recovery", 60, &["Stand tall", "Gentle movements", "Feel how strong you are", "This is real strength"], "figure.stand", "Empowerment"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am strong in my daily life. Every movement is easier now."),
                mental(MentalKind::Reflection, 30, "What daily tasks feel easier? Picking things up? Getting up from a chair?"),
                mental(MentalKind::Breathing, 25, "Practical breath: Notice how breath supports real movement."),
            ],
            "Day 12 mastered! Real-world strength gained. 💼",
        ),
        program(
            13,
            "Power Day",
            "Peak Performance",
            "Unleashing Potential",
            vec![
                exercise("Power Prep Breathing", 45, &["Quick, energizing breaths", "Build internal fire", "Feel your power", "Ready to dominate"], "bolt.fill", "Energy"),
                exercise("Dynamic Bird Dog", 50, &["Full extension", "Hold briefly", "Quick transitions", "Maximum engagement"], "figure.core.training", "Core Power"),
                exercise("Explosive Bridges", 45, &["Push up with power", "Controlled lower", "Glutes firing", "Building explosive strength"], "figure.strengthtraining.traditional", "Glutes"),
                exercise("Mountain Climbers (Modified)", 40, &["Plank position", "Knee to chest alternating", "Controlled pace", "Core and cardio"], "figure.run", "Full Body"),
                exercise("Power Down Rest", 90, &["You crushed it", "Deep, restorative breathing", "Muscles repairing", "Champions rest well"], "crown.fill", "Champion Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am powerful. My body is capable of amazing things."),
                mental(MentalKind::Breathing, 30, "Victory breath: Breathe in success, exhale any self-doubt."),
                mental(MentalKind::Reflection, 25, "You just did exercises that seemed impossible two weeks ago. Feel that."),
            ],
            "Day 13 demolished! You are POWERFUL. ⚡",
        ),
        program(
            14,
            "Week Two Champion",
            "Strength Integration",
            "Owning Your Progress",
            vec![
                exercise("Champion's Breathing", 60, &["Breathe like a champion", "You've earned this title", "Two weeks of consistency", "Feel the pride"], "crown.fill", "Confidence"),
                exercise("Full Body Flow", 70, &["Cat-cow flow", "Bird dog both sides", "Bridges with control", "Your strongest versions"], "figure.yoga", "Integration"),
                exercise("Core Challenge", 60, &["Plank hold", "Dead bug", "Side planks", "Show your strength"], "figure.core.training", "Core Mastery"),
                exercise("Posture Power", 50, &["Wall angels", "Prone cobras", "Stand tall and proud", "Embody strength"], "figure.stand", "Posture"),
                exercise("Victory Savasana", 120, &["Lie in complete rest", "Reflect on 14 days", "Two full weeks completed", "You are transformed"], "sparkles", "Celebration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 20, "I completed Week 2. I am stronger, more stable, and more confident."),
                mental(MentalKind::Reflection, 60, "Compare Day 1 to Day 14. What changed physically? Mentally? Emotionally?"),
                mental(MentalKind::Breathing, 30, "Gratitude breath: Thank your body for its incredible healing capacity."),
            ],
            "WEEK 2 COMPLETE! You are officially strong. Halfway to your goal! 🏆",
        ),
    ]
}

/// Week 3 (Days 15-21): flexibility and stress release.
fn week_three_mobilize() -> Vec<DayProgram> {
    vec![
        program(
            15,
            "Opening New Doors",
            "Flexibility Focus",
            "Expanding Possibilities",
            vec![
                exercise("Expansive Breathing", 60, &["Breathe into all areas", "Feel your body expand", "Creating space", "Opening to possibilities"], "wind", "Expansion"),
                exercise("Deep Hip Flexor Stretch", 60, &["Low lunge position", "Feel deep hip opening", "Hold and breathe", "Both sides"], "figure.flexibility", "Hip Flexors"),
                exercise("Seated Forward Fold", 50, &["Sit with legs extended", "Reach toward toes", "Bend from hips", "Hamstring opening"], "figure.yoga", "Hamstrings"),
                exercise("Reclined Hamstring Stretch", 50, &["Strap or towel around foot", "Gently pull leg toward you", "Keep knee soft", "Both sides"], "figure.flexibility", "Hamstrings"),
                exercise("Openness Integration", 70, &["Notice the new space", "Breathe into it", "Feel the expansion", "Rest in openness"], "sparkles", "Integration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am flexible in body and mind. I open to new possibilities."),
                mental(MentalKind::Breathing, 30, "Expansion breath: Each inhale creates more internal space."),
                mental(MentalKind::Reflection, 25, "Where else in life can you be more flexible?"),
            ],
            "Day 15 done! Week 3: Flexibility has begun. 🌈",
        ),
        program(
            16,
            "Tension Release",
            "Letting Go Deeply",
            "Emotional Release",
            vec![
                exercise("Release Breathing", 60, &["Sigh out loud on exhale", "Let go audibly", "Release stored tension", "Sound is healing"], "wind.snow", "Emotional Release"),
                exercise("Supine Twist Deep Hold", 60, &["Hold twist for full time", "Breathe into it", "Allow deep release", "Each side"], "figure.yoga", "Spine Release"),
                exercise("Pigeon Pose", 70, &["Deep hip opener", "Forward fold over front leg", "Breathe through emotion", "Hold and release"], "figure.flexibility", "Deep Hip Release"),
                exercise("Legs Up the Wall", 90, &["Hips close to wall", "Legs straight up", "Arms wide", "Full body release"], "figure.cooldown", "Full Release"),
                exercise("Emotional Integration", 80, &["Notice what came up", "Allow all feelings", "No judgment", "You are safe"], "heart.fill", "Emotional Healing"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I release what I've been holding. It is safe to let go."),
                mental(MentalKind::Breathing, 30, "Letting go breath: Exhale is longer than inhale. Release with sound."),
                mental(MentalKind::Reflection, 30, "What emotional tension have you been carrying in your back?"),
            ],
            "Day 16 complete! You released more than just physical tension. 🕊️",
        ),
        program(
            17,
            "Flow State",
            "Fluid Movement",
            "Being Present",
            vec![
                exercise("Flow Breathing", 60, &["Breath and movement unite", "No separation", "Pure flow state", "Present moment awareness"], "water.waves", "Presence"),
                exercise("Sun Salutation (Modified)", 90, &["Flow through positions", "Match breath to movement", "Continuous motion", "Find your rhythm"], "figure.yoga", "Full Body Flow"),
                exercise("Dynamic Cat-Cow", 60, &["Flow continuously", "Never stop moving", "Breath leads movement", "Pure flow"], "figure.flexibility", "Spine Flow"),
                exercise("Standing Flow Sequence", 70, &["Gentle standing stretches", "Flow from one to next", "Stay in movement", "Grace and ease"], "figure.mind.and.body", "Standing Flow"),
                exercise("Still Point", 90, &["After flow comes stillness", "Feel energy moving", "Present in your body", "Flow within stillness"], "sparkles", "Presence"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I flow through life with ease and grace. I am present."),
                mental(MentalKind::Breathing, 30, "Ocean breath: Like waves, continuous and rhythmic."),
                mental(MentalKind::Reflection, 25, "When did you lose track of time today? That was flow."),
            ],
            "Day 17 mastered! You found your flow. 🌊",
        ),
        program(
            18,
            "Thoracic Freedom",
            "Upper Back Mobility",
            "Opening the Heart",
            vec![
                exercise("Heart Opening Breathing", 60, &["Breathe into your chest", "Feel heart space expand", "Shoulders back naturally", "Emotional opening"], "heart.circle", "Heart Space"),
                exercise("Thoracic Extensions", 50, &["Over foam roller or pillow", "Gentle backbend", "Arms overhead", "Upper back opening"], "figure.flexibility", "Thoracic Spine"),
                exercise("Thread the Needle Flow", 60, &["Flow between both sides", "Deep shoulder stretch", "Thoracic rotation", "Continuous movement"], "figure.yoga", "Shoulders & T-Spine"),
                exercise("Doorway Chest Stretch", 50, &["Arm on doorframe", "Gentle lean forward", "Chest opening", "Both sides"], "figure.flexibility", "Chest & Shoulders"),
                exercise("Heart Space Rest", 80, &["Lie with support under shoulder blades", "Arms wide", "Chest open", "Breathe into heart"], "heart.fill", "Heart Opening"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "My heart is open. I receive and give love freely."),
                mental(MentalKind::Breathing, 30, "Heart breath: Breathe in love, breathe out fear."),
                mental(MentalKind::BodyScan, 25, "What do you feel in your heart space? Honor it."),
            ],
            "Day 18 done! Your heart space is open. 💚",
        ),
        program(
            19,
            "Lower Body Liberation",
            "Hip & Leg Mobility",
            "Grounding & Release",
            vec![
                exercise("Grounding Breathing", 60, &["Breathe down into legs", "Feel connection to earth", "Roots growing deep", "Stable and grounded"], "leaf.fill", "Grounding"),
                exercise("Deep Lunge Series", 70, &["Low lunge variations", "Hold each deeply", "Hip flexor opening", "Feel the release"], "figure.flexibility", "Hip Flexors"),
                exercise("90/90 Hip Stretch", 60, &["Both knees at 90 degrees", "Sit between feet", "Deep hip rotation work", "Breathe into tightness"], "figure.yoga", "Hip Rotators"),
                exercise("Calf and Hamstring Flow", 60, &["Downward dog variations", "Pedal feet", "Bend and straighten knees", "Full leg opening"], "figure.flexibility", "Legs"),
                exercise("Grounded Rest", 80, &["Feel heavy and grounded", "Supported by earth", "Lower body released", "Deep rest"], "figure.cooldown", "Grounding"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I am grounded and stable. My foundation is strong."),
                mental(MentalKind::Breathing, 30, "Earth breath: Exhale down into the ground, release into earth."),
                mental(MentalKind::Reflection, 25, "What helps you feel grounded in daily life?"),
            ],
            "Day 19 complete! Grounded and free. 🌍",
        ),
        program(
            20,
            "Full Body Freedom",
            "Complete Mobility",
            "Wholeness",
            vec![
                exercise("Whole Body Breathing", 60, &["Breathe into every cell", "Full body awareness", "Complete integration", "You are whole"], "wind.circle.fill", "Wholeness"),
                exercise("Full Sun Salutation", 90, &["Complete flow sequence", "Every part moves", "Breath guides all", "Integrated movement"], "figure.yoga", "Full Body"),
                exercise("Comprehensive Stretch Sequence", 90, &["Neck to toes", "Every major muscle group", "Hold each briefly", "Complete body opening"], "figure.flexibility", "Full Body Mobility"),
                exercise("Spinal Waves", 60, &["Articulate entire spine", "Sequential movement", "Head to tailbone", "Fluid spine"], "figure.mind.and.body", "Full Spine"),
                exercise("Whole Body Integration", 100, &["Lie in complete rest", "Scan every part", "Notice the freedom", "You are transformed"], "sparkles", "Integration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 20, "I am whole, complete, and free. My body moves with ease."),
                mental(MentalKind::BodyScan, 40, "Scan from head to toe. Notice the difference from Day 1."),
                mental(MentalKind::Breathing, 30, "Unity breath: All parts breathing as one whole."),
            ],
            "Day 20 mastered! You are free in your body. ✨",
        ),
        program(
            21,
            "Week Three Victory",
            "Flexibility Celebration",
            "Embracing Change",
            vec![
                exercise("Transformation Breathing", 70, &["Reflect on three weeks", "Feel how much has changed", "Breathe gratitude", "Celebrate transformation"], "sparkles", "Transformation"),
                exercise("Freedom Flow", 100, &["Move completely freely", "Your favorite stretches", "Intuitive movement", "Express your freedom"], "figure.dance", "Free Movement"),
                exercise("Deep Hip Opening", 80, &["Pigeon, figure 4, happy baby", "Hold each long", "Release completely", "You are open"], "figure.flexibility", "Hips"),
                exercise("Full Spine Mobility", 70, &["All spine movements", "Flexion, extension, rotation", "Complete range", "Spine is free"], "figure.yoga", "Spine"),
                exercise("Victory Savasana", 120, &["Three weeks complete", "You are remarkable", "Rest in this achievement", "One more week to go"], "crown.fill", "Celebration"),
            ],
            vec![
                mental(MentalKind::Affirmation, 20, "I embrace change. I am flexible in body, mind, and spirit."),
                mental(MentalKind::Reflection, 60, "What has shifted in your life beyond back pain? What else changed?"),
                mental(MentalKind::Breathing, 30, "Change breath: Each breath is a new beginning."),
            ],
            "WEEK 3 COMPLETE! You are mobile, flexible, and free. Final week awaits! 🎊",
        ),
    ]
}

/// Week 4 (Days 22-28): integration and long-term wellness.
fn week_four_sustain() -> Vec<DayProgram> {
    vec![
        program(
            22,
            "Building Habits",
            "Sustainable Practice",
            "Long-term Commitment",
            vec![
                exercise("Commitment Breathing", 60, &["Breathe into your future", "See yourself continuing", "This is who you are now", "Committed to wellness"], "heart.fill", "Commitment"),
                exercise("Essential Core Work", 60, &["Dead bug, bird dog, planks", "Your foundation exercises", "These are your staples", "Master the basics"], "figure.core.training", "Core Maintenance"),
                exercise("Daily Hip Openers", 60, &["Figure 4, pigeon, lunges", "Hip health for life", "Daily maintenance", "Keep hips happy"], "figure.flexibility", "Hip Maintenance"),
                exercise("Posture Check-In", 50, &["Wall angels, cobras", "Daily posture work", "Stand tall always", "Posture is power"], "figure.stand", "Posture"),
                exercise("Sustainable Rest", 70, &["Brief but deep", "Quality over quantity", "Efficient recovery", "This is sustainable"], "figure.cooldown", "Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "This is my new normal. I am committed to my daily practice."),
                mental(MentalKind::Reflection, 30, "How will you make this a permanent part of your life?"),
                mental(MentalKind::Breathing, 25, "Sustainable breath: Steady, consistent, forever."),
            ],
            "Day 22 done! Building habits that last. 🌱",
        ),
        program(
            23,
            "Minimum Effective Dose",
            "Efficiency",
            "Quality Over Quantity",
            vec![
                exercise("Focused Breathing", 50, &["Less time, more focus", "Each breath counts", "Quality attention", "Efficient practice"], "target", "Focus"),
                exercise("Power Core Circuit", 70, &["Best core exercises only", "Perfect form", "Maximum benefit", "Minimal time"], "figure.core.training", "Efficient Core"),
                exercise("Essential Stretches", 60, &["Only the most impactful", "Biggest bang for buck", "Hips, hamstrings, spine", "Smart stretching"], "figure.flexibility", "Essential Mobility"),
                exercise("Quick Posture Reset", 40, &["Fastest posture fixes", "Most effective cues", "Stand tall quickly", "Efficient alignment"], "figure.stand", "Quick Posture"),
                exercise("Effective Rest", 60, &["Even rest is efficient", "Deep relaxation quickly", "Recover fast", "Move on with your day"], "bolt.fill", "Efficient Recovery"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "Less can be more. I focus on what matters most."),
                mental(MentalKind::Reflection, 25, "Which exercises give you the most benefit? Focus there."),
                mental(MentalKind::Breathing, 20, "Efficient breath: Deep and focused, not long and scattered."),
            ],
            "Day 23 complete! Work smarter, not harder. 🎯",
        ),
        program(
            24,
            "Real Life Integration",
            "Living Your Practice",
            "Movement as Lifestyle",
            vec![
                exercise("Life Breathing", 50, &["Breathe like this all day", "Not just during practice", "Every breath matters", "Life is practice"], "wind", "Lifestyle Integration"),
                exercise("Chair Exercises", 60, &["Work-friendly movements", "At your desk", "In daily life", "Always accessible"], "figure.stand", "Office Wellness"),
                exercise("Micro-Movements", 50, &["Tiny movements, big impact", "While standing in line", "Waiting for coffee", "Life is movement"], "figure.walk", "Daily Movement"),
                exercise("Posture Anywhere", 50, &["Practice good posture now", "In car, at desk, standing", "Constant awareness", "Posture is practice"], "figure.stand.line.dotted.figure.stand", "Lifestyle Posture"),
                exercise("Life Integration Rest", 70, &["Rest is also life skill", "Breathe anywhere", "Quick resets all day", "Wellness is lifestyle"], "heart.circle.fill", "Lifestyle Wellness"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "My practice extends into every moment. I live well."),
                mental(MentalKind::Reflection, 30, "How can you integrate these principles into your whole day?"),
                mental(MentalKind::Breathing, 25, "Anywhere breath: You can practice breathing anywhere, anytime."),
            ],
            "Day 24 mastered! Living your wellness. 🌟",
        ),
        program(
            25,
            "Prevention Protocol",
            "Staying Pain-Free",
            "Proactive Wellness",
            vec![
                exercise("Prevention Breathing", 50, &["Breathe to prevent pain", "Before tension builds", "Proactive, not reactive", "Prevention is power"], "shield.fill", "Prevention"),
                exercise("Daily Spine Care", 70, &["Cat-cow every day", "Spine mobility daily", "Prevent stiffness", "Daily maintenance"], "figure.yoga", "Spine Prevention"),
                exercise("Hip Health Routine", 60, &["Keep hips open always", "Prevent tightness", "Daily hip work", "Hips stay healthy"], "figure.flexibility", "Hip Prevention"),
                exercise("Core Maintenance", 60, &["Strong core prevents pain", "Daily core work", "Maintain your gains", "Protection through strength"], "figure.core.training", "Core Prevention"),
                exercise("Prevention Rest", 70, &["Rest prevents burnout", "Recovery is prevention", "Rest to stay well", "Sustainable wellness"], "figure.cooldown", "Preventive Rest"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I prevent pain before it starts. I am proactive about my health."),
                mental(MentalKind::Reflection, 30, "What early warning signs will you watch for? How will you respond?"),
                mental(MentalKind::Breathing, 25, "Prevention breath: Breathe awareness into your body regularly."),
            ],
            "Day 25 done! Prevention is the best medicine. 🛡️",
        ),
        program(
            26,
            "Teaching Moment",
            "Sharing Your Knowledge",
            "Helping Others",
            vec![
                exercise("Teaching Breathing", 50, &["Could you teach this?", "Understand it deeply", "Help others breathe", "Share the gift"], "person.2.fill", "Teaching"),
                exercise("Explainable Exercises", 70, &["Do each as if teaching", "Understand why it works", "Could you explain it?", "Deep knowledge"], "book.fill", "Understanding"),
                exercise("Simple Cues Practice", 60, &["What would you tell someone?", "Simple, clear cues", "Share the wisdom", "You are knowledgeable"], "text.bubble.fill", "Communication"),
                exercise("Demonstration Quality", 50, &["Show-ready form", "Perfect enough to teach", "Lead by example", "You are the example"], "star.fill", "Mastery"),
                exercise("Grateful Rest", 80, &["Grateful you can share", "You have a gift to give", "Rest in that knowledge", "You help others"], "heart.fill", "Gratitude"),
            ],
            vec![
                mental(MentalKind::Affirmation, 15, "I have knowledge to share. I can help others heal."),
                mental(MentalKind::Reflection, 35, "Who in your life could benefit from what you've learned?"),
                mental(MentalKind::Breathing, 25, "Shared breath: Imagine breathing with someone you could help."),
            ],
            "Day 26 complete! You have wisdom to share. 🎓",
        ),
        program(
            27,
            "Confidence Day",
            "Owning Your Transformation",
            "Self-Assurance",
            vec![
                exercise("Confident Breathing", 60, &["Breathe with confidence", "You've earned this", "Strong, sure breaths", "Confidence in every inhale"], "sparkles", "Confidence"),
                exercise("Power Demonstration", 80, &["Show your strongest work", "Advanced variations", "You are capable", "Demonstrate mastery"], "bolt.fill", "Power Display"),
                exercise("Full Range Mobility", 70, &["Move through complete ranges", "Show your flexibility", "Freedom of movement", "You are mobile"], "figure.flexibility", "Mobility Display"),
                exercise("Controlled Excellence", 70, &["Perfect form, full control", "Mastery in motion", "Precision and power", "You are skilled"], "target", "Mastery"),
                exercise("Confident Rest", 90, &["Rest like a champion", "You've proven yourself", "Confident in your body", "You are transformed"], "crown.fill", "Champion Rest"),
            ],
            vec![
                mental(MentalKind::Affirmation, 20, "I am confident in my body. I trust my strength and capabilities."),
                mental(MentalKind::Reflection, 40, "List everything you can do now that you couldn't do 27 days ago."),
                mental(MentalKind::Breathing, 30, "Power breath: Breathe in confidence, breathe out any remaining doubt."),
            ],
            "Day 27 conquered! One day left. You are ready. 💎",
        ),
        program(
            28,
            "The Final Day - Your New Beginning",
            "Completion & Continuation",
            "Transformation Complete",
            vec![
                exercise("Journey Breathing", 90, &["Breathe in your whole journey", "Day 1 to now", "Feel every moment", "This is who you are now"], "heart.circle.fill", "Reflection"),
                exercise("Victory Flow", 120, &["Your favorite movements", "Everything you've learned", "Freedom in motion", "This is your flow"], "figure.dance", "Celebration"),
                exercise("Strength Showcase", 90, &["Your strongest core work", "Show what you've built", "Power and control", "You are strong"], "figure.strengthtraining.traditional", "Strength"),
                exercise("Flexibility Freedom", 90, &["Deepest stretches", "Complete range of motion", "You are free", "Movement without pain"], "figure.flexibility", "Freedom"),
                exercise("Final Savasana - New Beginning", 180, &["This is not the end", "This is your new normal", "You are transformed", "The journey continues"], "infinity", "New Beginning"),
            ],
            vec![
                mental(MentalKind::Affirmation, 30, "I completed the 28-Day Challenge. I am transformed. I continue forward."),
                mental(MentalKind::Reflection, 120, "Journal prompt: Write about your transformation. Physical, mental, emotional. What changed? Who are you now?"),
                mental(MentalKind::Breathing, 60, "Infinite breath: This practice continues forever. You are forever changed."),
            ],
            "🎉 28 DAY CHALLENGE COMPLETE! 🎉\n\nYou did it. Every single day. You showed up for yourself.\n\nYou are no longer the person who started this challenge.\n\nYour back is stronger. Your mind is clearer. Your life is different.\n\nThis isn't the end. This is who you are now.\n\nWelcome to the rest of your life. 🌟",
        ),
    ]
}
