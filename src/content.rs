//! Static page content for the home, learn, patterns and refactoring views.

pub struct Feature {
    pub title: &'static str,
    pub summary: &'static str,
}

pub struct Lesson {
    pub title: &'static str,
    pub description: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub video_id: &'static str,
}

impl Lesson {
    pub fn video_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// The long-form explanation shown when a pattern is opened.
pub struct PatternDetail {
    pub intent: &'static str,
    pub problem: &'static str,
    pub solution: &'static [&'static str],
}

pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub detail: Option<PatternDetail>,
}

pub struct PatternFamily {
    pub name: &'static str,
    pub patterns: &'static [Pattern],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Impact::High => "High Impact",
            Impact::Medium => "Medium Impact",
            Impact::Low => "Low Impact",
        }
    }
}

pub struct CodeSmell {
    pub name: &'static str,
    pub impact: Impact,
    pub description: &'static str,
}

pub struct Technique {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub const HOME_HEADLINE: &str = "Master System Design";
pub const HOME_SUBHEADLINE: &str = "Through Interactive Learning";
pub const HOME_PITCH: &str = "Learn complex concepts through engaging videos, interactive quizzes, and AI-powered guidance. Built for visual learners and accessible to everyone.";

pub const HOME_FEATURES: [Feature; 4] = [
    Feature {
        title: "AI-Powered",
        summary: "Get personalized recommendations and instant answers to your questions",
    },
    Feature {
        title: "Video Lessons",
        summary: "Learn from curated YouTube content integrated seamlessly",
    },
    Feature {
        title: "Interactive Quizzes",
        summary: "Test your knowledge with instant feedback and progress tracking",
    },
    Feature {
        title: "Accessible",
        summary: "WCAG compliant with keyboard navigation and screen reader support",
    },
];

pub const LESSONS: [Lesson; 3] = [
    Lesson {
        title: "Introduction to System Design",
        description: "Learn the fundamentals of designing scalable systems",
        level: "Beginner",
        duration: "15 min",
        video_id: "UzLMhqg3_Wc",
    },
    Lesson {
        title: "Database Scaling",
        description: "Master horizontal and vertical scaling techniques",
        level: "Intermediate",
        duration: "20 min",
        video_id: "xpDnVSmNFX0",
    },
    Lesson {
        title: "Load Balancing",
        description: "Understand how to distribute traffic effectively",
        level: "Intermediate",
        duration: "18 min",
        video_id: "K0Ta65OqQkY",
    },
];

const fn pattern(name: &'static str, description: &'static str) -> Pattern {
    Pattern {
        name,
        description,
        detail: None,
    }
}

const fn detailed(
    name: &'static str,
    description: &'static str,
    intent: &'static str,
    problem: &'static str,
    solution: &'static [&'static str],
) -> Pattern {
    Pattern {
        name,
        description,
        detail: Some(PatternDetail {
            intent,
            problem,
            solution,
        }),
    }
}

pub static PATTERN_FAMILIES: [PatternFamily; 3] = [
    PatternFamily {
        name: "Creational",
        patterns: &[
            detailed(
                "Factory Method",
                "Creates objects without specifying exact classes",
                "Factory Method provides an interface for creating objects in a superclass, but allows subclasses to alter the type of objects that will be created.",
                "Imagine you're creating a logistics management application. Initially, it only handles truck transport, but later you need to add ships. Adding a new transport type requires changing the entire codebase.",
                &[
                    "Replace direct object construction calls with calls to a special factory method.",
                    "Objects returned by a factory method are often referred to as products.",
                ],
            ),
            detailed(
                "Abstract Factory",
                "Produces families of related objects",
                "Abstract Factory lets you produce families of related objects without specifying their concrete classes.",
                "You're creating a furniture shop simulator. Your code consists of classes that represent families of related products (Chair, Sofa, Table) with several variants (Modern, Victorian, ArtDeco). You need a way to create individual furniture objects so they match other objects of the same family.",
                &[],
            ),
            detailed(
                "Builder",
                "Constructs complex objects step by step",
                "Builder lets you construct complex objects step by step. The pattern allows you to produce different types and representations of an object using the same construction code.",
                "Creating a complex object with many optional parameters leads to constructor explosion or telescoping constructors.",
                &["Extract the construction code out of the object's own class and move it to separate objects called builders."],
            ),
            detailed(
                "Prototype",
                "Clones existing objects",
                "Prototype lets you copy existing objects without making your code dependent on their classes.",
                "If you want to create an exact copy of an object, you'd need to create a new object of the same class, then go through all fields and copy their values. However, you might not have access to all fields if some are private.",
                &["Delegate the cloning process to the actual objects being cloned."],
            ),
            detailed(
                "Singleton",
                "Ensures only one instance exists",
                "Singleton ensures a class has only one instance and provides a global point of access to it.",
                "Ensure that a class has just a single instance (e.g., database connection, logger) and provide a global access point to that instance. Solving both at once violates the Single Responsibility Principle.",
                &[
                    "Make the default constructor private to prevent other objects from using the new operator",
                    "Create a static creation method that acts as a constructor",
                    "This method calls the private constructor and saves the object in a static field",
                ],
            ),
        ],
    },
    PatternFamily {
        name: "Structural",
        patterns: &[
            detailed(
                "Adapter",
                "Allows incompatible interfaces to work together",
                "Adapter allows objects with incompatible interfaces to collaborate. It acts as a wrapper between two objects, catching calls for one object and transforming them to format and interface recognizable by the second object.",
                "You have a stock market monitoring app that works with XML data. You want to integrate a third-party analytics library, but it only works with JSON. You can't modify the library since it's closed-source or used by other parts of your system.",
                &["Create an adapter class that wraps the incompatible object and translates calls to the format it expects."],
            ),
            detailed(
                "Bridge",
                "Separates abstraction from implementation",
                "Bridge lets you split a large class or a set of closely related classes into two separate hierarchies, abstraction and implementation, which can be developed independently of each other.",
                "You have a Shape class with Circle and Square subclasses. You want to add colors (Red, Blue), so you'd need RedCircle, BlueCircle, RedSquare, BlueSquare. Adding new shapes or colors creates a combinatorial explosion of classes.",
                &[],
            ),
            detailed(
                "Composite",
                "Composes objects into tree structures",
                "Composite lets you compose objects into tree structures to represent part-whole hierarchies. Composite lets clients treat individual objects and compositions of objects uniformly.",
                "You need to implement a tree-like object structure (e.g., file system with files and folders, or a UI with nested components). You want to treat both simple elements and containers uniformly.",
                &[],
            ),
            detailed(
                "Decorator",
                "Adds new functionality to objects",
                "Decorator lets you attach new behaviors to objects by placing these objects inside special wrapper objects that contain the behaviors. It's a flexible alternative to subclassing for extending functionality.",
                "You have a notification system. Initially you only have email notifications, but users want SMS, Facebook, Slack notifications. You could create subclasses for each combination (EmailNotifier, SMSNotifier, EmailAndSMSNotifier...), but this leads to class explosion.",
                &[],
            ),
            detailed(
                "Facade",
                "Provides simplified interface to complex system",
                "Facade provides a simplified interface to a library, a framework, or any other complex set of classes. It defines a higher-level interface that makes the subsystem easier to use.",
                "Your code needs to work with a broad set of objects from a sophisticated library or framework. You need to initialize all objects, keep track of dependencies, execute methods in the right order, etc. Business logic becomes tightly coupled to implementation details.",
                &[],
            ),
            detailed(
                "Proxy",
                "Controls access to another object",
                "Proxy provides a substitute or placeholder for another object. A proxy controls access to the original object, allowing you to perform something either before or after the request gets through to the original object.",
                "You have a massive object that consumes system resources. You need it from time to time, but not always. You could implement lazy initialization, but this would require code duplication.",
                &[
                    "Virtual Proxy: lazy initialization (create expensive object on demand)",
                    "Protection Proxy: access control (check permissions before request)",
                    "Remote Proxy: represents object in different address space",
                    "Caching Proxy: cache results of expensive operations",
                ],
            ),
        ],
    },
    PatternFamily {
        name: "Behavioral",
        patterns: &[
            pattern("Chain of Responsibility", "Passes requests along chain of handlers"),
            pattern("Command", "Encapsulates requests as objects"),
            pattern("Iterator", "Traverses elements of collection"),
            pattern("Observer", "Notifies multiple objects about events"),
            pattern("Strategy", "Defines family of algorithms"),
            pattern("Template Method", "Defines skeleton of algorithm"),
        ],
    },
];

/// Number of patterns across every family.
pub fn pattern_count() -> usize {
    PATTERN_FAMILIES.iter().map(|family| family.patterns.len()).sum()
}

/// Look up a pattern by its position in the flattened catalogue.
pub fn pattern_at(index: usize) -> Option<(&'static PatternFamily, &'static Pattern)> {
    let mut remaining = index;
    for family in &PATTERN_FAMILIES {
        if remaining < family.patterns.len() {
            return Some((family, &family.patterns[remaining]));
        }
        remaining -= family.patterns.len();
    }
    None
}

pub const REFACTORING_INTRO: &str = "Refactoring is the process of changing a software system in such a way that it does not alter the external behavior of the code yet improves its internal structure. It's a disciplined way to clean up code that minimizes the chances of introducing bugs.";

pub const BEFORE_REFACTORING: [&str; 5] = [
    "Long, complex methods",
    "Duplicate code everywhere",
    "Hard to understand logic",
    "Difficult to test",
    "Takes hours to add features",
];

pub const AFTER_REFACTORING: [&str; 5] = [
    "Small, focused methods",
    "DRY (Don't Repeat Yourself)",
    "Clear, readable code",
    "Easy to test",
    "Fast feature development",
];

pub const CODE_SMELLS: [CodeSmell; 5] = [
    CodeSmell {
        name: "Long Method",
        impact: Impact::High,
        description: "Method that has grown too large",
    },
    CodeSmell {
        name: "Duplicate Code",
        impact: Impact::High,
        description: "Same code structure in multiple places",
    },
    CodeSmell {
        name: "Large Class",
        impact: Impact::Medium,
        description: "Class trying to do too much",
    },
    CodeSmell {
        name: "Long Parameter List",
        impact: Impact::Medium,
        description: "Too many parameters in a method",
    },
    CodeSmell {
        name: "Dead Code",
        impact: Impact::Low,
        description: "Unused code that should be removed",
    },
];

pub const TECHNIQUES: [Technique; 4] = [
    Technique {
        name: "Extract Method",
        description: "Break down long methods into smaller, focused ones",
        example: "When a method does too many things",
    },
    Technique {
        name: "Rename Variable",
        description: "Give variables clear, meaningful names",
        example: "Change 'd' to 'daysSinceCreation'",
    },
    Technique {
        name: "Move Method",
        description: "Move methods to more appropriate classes",
        example: "When a method uses more features of another class",
    },
    Technique {
        name: "Replace Magic Number",
        description: "Replace hardcoded numbers with named constants",
        example: "Replace '86400' with 'SECONDS_PER_DAY'",
    },
];

pub const REFACTORING_STEPS: [(&str, &str); 4] = [
    ("Identify", "Code Smell"),
    ("Write Tests", "Ensure Safety"),
    ("Refactor", "Small Steps"),
    ("Verify", "Run Tests"),
];

pub const GOLDEN_RULE: &str = "Always have tests before refactoring. Tests are your safety net that ensures you haven't broken anything.";

pub const WHEN_TO_REFACTOR: [Feature; 4] = [
    Feature {
        title: "Rule of Three",
        summary: "When you do something for the third time, refactor it into a reusable solution.",
    },
    Feature {
        title: "Before Adding Features",
        summary: "Clean up the code first to make the new feature easier to add.",
    },
    Feature {
        title: "During Bug Fixes",
        summary: "If code is confusing and causing bugs, refactor it while fixing.",
    },
    Feature {
        title: "During Code Review",
        summary: "Review is the perfect time to spot refactoring opportunities.",
    },
];
