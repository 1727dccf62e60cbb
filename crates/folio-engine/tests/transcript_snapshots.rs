use folio_engine::terminal::{self, CommandAction, CommandTable, Effect, Preset};
use folio_types::Portfolio;

fn table(preset: Preset) -> CommandTable {
    CommandTable::preset(preset, &Portfolio::default())
}

#[test]
fn test_navigate_session_transcript() {
    let (transcript, submissions) =
        terminal::replay(table(Preset::Navigate), ["help", "About", "projects", "ls -la"]);

    insta::assert_snapshot!(transcript.lines().join("\n"), @r###"
    > System initialized...
    > Welcome to the AI interface
    > Type "help" for available commands
    > help
    Available commands: about, projects, skills, contact, clear
    > About
    > projects
    > ls -la
    Command not recognized. Type "help" for available commands.
    "###);

    let effects: Vec<&Effect> = submissions.iter().filter_map(|s| s.effect()).collect();
    assert_eq!(
        effects,
        vec![
            &Effect::ScrollToSection("about".to_string()),
            &Effect::NavigateToPage("/projects".to_string()),
        ]
    );
}

#[test]
fn test_summary_session_transcript() {
    let (transcript, _) =
        terminal::replay(table(Preset::Summary), ["projects", "SKILLS", "contact"]);

    insta::assert_snapshot!(transcript.lines()[3..].join("\n"), @r###"
    > projects
    Projects: AxinTweak, AI Assist, Codevert, Dietmaxx, CROPIX, HumanEval
    > SKILLS
    Skills: Programming, Finance, Scripting, Technology, Analytics
    > contact
    Status: Online. AI interface active. Ready to collaborate on your next project.
    "###);
}

#[test]
fn test_clear_in_the_middle_of_a_script() {
    let (transcript, _) =
        terminal::replay(table(Preset::Navigate), ["help", "clear", "nope"]);

    insta::assert_snapshot!(transcript.lines().join("\n"), @r###"
    > Terminal cleared
    > nope
    Command not recognized. Type "help" for available commands.
    "###);
}

#[test]
fn test_every_input_appends_at_least_one_line() {
    let inputs = ["", " ", "help", "ABOUT", "projects", "skills", "contact", "x y z", "\t"];
    for input in inputs {
        let (transcript, _) = terminal::replay(table(Preset::Navigate), [input]);
        assert!(transcript.len() > 3, "no line appended for {:?}", input);
    }
}

#[test]
fn test_clear_always_leaves_one_line() {
    for n in 0..5 {
        let mut script: Vec<&str> = vec!["zzz"; n];
        script.push("clear");
        let (transcript, _) = terminal::replay(table(Preset::Summary), script);
        assert_eq!(transcript.lines(), &["> Terminal cleared".to_string()]);
    }
}

#[test]
fn test_custom_table_command() {
    let table = table(Preset::Navigate).with(
        "resume",
        CommandAction::Navigate {
            path: "/resume.pdf".to_string(),
        },
    );
    let (_, submissions) = terminal::replay(table, ["RESUME"]);
    assert_eq!(
        submissions[0].effect(),
        Some(&Effect::NavigateToPage("/resume.pdf".to_string()))
    );
}

#[test]
fn test_submission_json_shape() {
    let (_, submissions) = terminal::replay(table(Preset::Navigate), ["about", "zzz"]);
    let json = serde_json::to_string_pretty(&submissions).unwrap();
    insta::assert_snapshot!(json, @r###"
    [
      {
        "input": "about",
        "outcome": "navigated",
        "effect": {
          "kind": "scroll_to_section",
          "target": "about"
        }
      },
      {
        "input": "zzz",
        "outcome": "unrecognized"
      }
    ]
    "###);
}
