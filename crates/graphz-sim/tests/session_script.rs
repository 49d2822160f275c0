use std::io::Cursor;

use graphz_algo::Algorithm;
use graphz_core::{Color, Position, VertexId};
use graphz_graph::{demo_graph, isolated_vertices, Graph, GraphConfig};
use graphz_replay::Advance;
use graphz_sim::{run_lines, Canvas, Command, Reply, Session};

fn v(index: usize) -> VertexId {
    VertexId::new(index)
}

fn demo_session() -> Session {
    Session::new(demo_graph().unwrap(), Canvas::default(), Algorithm::Bfs, v(0)).unwrap()
}

fn script(session: &mut Session, input: &str) -> String {
    let mut output = Vec::new();
    run_lines(session, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn stepping_and_show() {
    let mut session = demo_session();
    let output = script(&mut session, "n\n\n# comment\nn\nshow\nq\nn\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "color 0: unvisited -> in-progress");
    assert_eq!(lines[1], "check 0");
    assert_eq!(lines[2], "bfs from 0: step 2/20, checking 0");
    assert_eq!(lines[3], "*  0 (50, 50) in-progress -> 1 2 3");
    assert_eq!(lines[4], "   1 (50, 100) unvisited   -> 0 2");
    assert_eq!(lines.last(), Some(&"bye"));
    // Input after `q` is not read.
    assert_eq!(session.cursor().index(), 2);
}

#[test]
fn exhausted_trace_reports_finished() {
    let mut session = demo_session();
    for _ in 0..20 {
        assert!(matches!(
            session.execute(Command::Next).unwrap(),
            Reply::Stepped(Advance::Applied(_))
        ));
    }
    assert_eq!(session.graph().colors(), vec![Color::Done; 4]);
    let reply = session.execute(Command::Next).unwrap();
    assert_eq!(reply, Reply::Stepped(Advance::Exhausted));
    assert_eq!(reply.to_string(), "trace finished");
}

#[test]
fn added_vertex_lands_on_canvas_centre_and_marks_trace_stale() {
    let mut session = demo_session();
    assert_eq!(session.execute(Command::AddVertex).unwrap(), Reply::VertexAdded(v(4)));
    assert_eq!(session.graph().position(v(4)).unwrap(), Position::new(400.0, 300.0));
    assert!(session.is_stale());
    assert!(session.describe().contains("r records a fresh trace"));

    let reply = session.execute(Command::Reset).unwrap();
    assert_eq!(
        reply,
        Reply::Recorded {
            algorithm: Algorithm::Bfs,
            steps: 20
        }
    );
    assert!(!session.is_stale());
}

#[test]
fn reset_repaints_and_rewinds() {
    let mut session = demo_session();
    script(&mut session, "n\nn\nn\nn\n");
    assert_ne!(session.graph().color(v(1)).unwrap(), Color::Unvisited);
    script(&mut session, "r\n");
    assert_eq!(session.cursor().index(), 0);
    assert_eq!(session.cursor().highlighted(), None);
    assert!(session.graph().colors().iter().all(|c| *c == Color::Unvisited));
}

#[test]
fn connect_session_keeps_bridges_across_reset() {
    let graph = isolated_vertices(2, GraphConfig::default()).unwrap();
    let mut session = Session::new(graph, Canvas::default(), Algorithm::ConnectComponents, v(0)).unwrap();
    assert_eq!(session.cursor().trace().added_edges().count(), 2);
    let steps = session.cursor().len();
    let output = script(&mut session, &"n\n".repeat(steps));
    assert!(output.contains("add-edge 0 -> 1"));
    assert!(session.graph().is_connected());

    script(&mut session, "r\n");
    assert_eq!(session.cursor().trace().added_edges().count(), 0);
    assert_eq!(session.graph().edge_count(), 2);
}

#[test]
fn edges_and_moves_edit_the_graph() {
    let mut session = demo_session();
    let output = script(&mut session, "e 3 2\nm 1 10.5 20\n");
    assert_eq!(output, "added edge 3 - 2\nmoved 1 to (10.5, 20)\n");
    assert_eq!(session.graph().neighbors(v(3)).unwrap(), &[v(0), v(2)]);
    assert_eq!(session.graph().position(v(1)).unwrap(), Position::new(10.5, 20.0));
    assert!(session.is_stale());
}

#[test]
fn switching_algorithm_records_fresh_trace() {
    let mut session = demo_session();
    let output = script(&mut session, "algo dfs 3\nshow\n");
    assert!(output.starts_with("recorded dfs: "));
    assert!(output.contains("dfs from 3: step 0/"));
    assert_eq!(session.algorithm(), Algorithm::Dfs);
}

#[test]
fn failed_commands_leave_session_untouched() {
    let mut session = demo_session();
    script(&mut session, "n\n");
    let before_graph = session.graph().clone();
    let output = script(&mut session, "e 0 9\nalgo bfs 9\nalgo dijkstra\nfly away\nm 0 x 1\n");
    let errors: Vec<&str> = output.lines().filter(|line| line.starts_with("error: ")).collect();
    assert_eq!(errors.len(), 5);
    assert!(errors[0].contains("invalid vertex"));
    assert!(errors[2].contains("unknown-algorithm"));
    assert!(errors[3].contains("parse-command"));
    assert_eq!(session.graph(), &before_graph);
    assert_eq!(session.cursor().index(), 1);
    assert_eq!(session.algorithm(), Algorithm::Bfs);
}

#[test]
fn command_parsing() {
    assert_eq!("n".parse::<Command>().unwrap(), Command::Next);
    assert_eq!(" e 1 2 ".parse::<Command>().unwrap(), Command::Edge(v(1), v(2)));
    assert_eq!(
        "m 2 10.5 -3".parse::<Command>().unwrap(),
        Command::Move(v(2), Position::new(10.5, -3.0))
    );
    assert_eq!(
        "algo connect".parse::<Command>().unwrap(),
        Command::Algorithm(Algorithm::ConnectComponents, None)
    );
    assert_eq!(
        "algo bipartite 4".parse::<Command>().unwrap(),
        Command::Algorithm(Algorithm::BipartiteCheck, Some(v(4)))
    );
    assert_eq!("n 3".parse::<Command>().unwrap_err().code(), "parse-command");
    assert_eq!("e -1 2".parse::<Command>().unwrap_err().code(), "parse-command");
    assert_eq!("m 0 inf 1".parse::<Command>().unwrap_err().code(), "parse-command");
}

#[test]
fn empty_graph_session_grows_from_scratch() {
    let mut session = Session::new(Graph::default(), Canvas::default(), Algorithm::Bfs, v(0)).unwrap();
    assert!(session.cursor().is_empty());
    let output = script(&mut session, "a\nr\nn\nn\nn\nn\n");
    assert_eq!(
        output,
        "added vertex 0\n\
         recorded bfs: 3 steps\n\
         color 0: unvisited -> in-progress\n\
         check 0\n\
         color 0: in-progress -> done\n\
         trace finished\n"
    );
}
