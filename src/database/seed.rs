use crate::models::ActivityRow;

// Startup roster. Order here is the order `GET /activities` returns.
pub fn seed_activities() -> Vec<ActivityRow> {
    vec![
        ActivityRow::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        ActivityRow::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        ActivityRow::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        ActivityRow::new(
            "Debate Club",
            "Practice public speaking and argue both sides of current topics",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["liam@mergington.edu", "ava@mergington.edu"],
        ),
        ActivityRow::new(
            "Art Studio",
            "Explore drawing, painting and mixed media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["mia@mergington.edu", "noah@mergington.edu"],
        ),
        ActivityRow::new(
            "Science Club",
            "Run hands-on experiments and prepare for the science fair",
            "Mondays, 3:30 PM - 4:30 PM",
            18,
            &["ethan@mergington.edu", "isabella@mergington.edu"],
        ),
    ]
}
