use crate::models::Question;

/// The compiled-in question set shown on the quiz page.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the primary purpose of a load balancer?",
            [
                "To store data",
                "To distribute traffic across multiple servers",
                "To encrypt data",
                "To compile code",
            ],
            1,
        ),
        Question::new(
            "Which database scaling approach involves adding more machines?",
            [
                "Vertical scaling",
                "Horizontal scaling",
                "Diagonal scaling",
                "Internal scaling",
            ],
            1,
        ),
        Question::new(
            "What does CAP theorem stand for?",
            [
                "Consistency, Availability, Partition tolerance",
                "Capacity, Allocation, Performance",
                "Cache, API, Protocol",
                "Connection, Authentication, Permission",
            ],
            0,
        ),
    ]
}
