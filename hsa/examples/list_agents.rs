use hsa::system::Runtime;

fn main() {
    let runtime = Runtime::new().unwrap();

    let agents = runtime.agents().unwrap();

    for agent in agents.iter() {
        println!(
            "Node {} - {} ({})",
            agent.node_id().unwrap(),
            agent.name().unwrap(),
            agent.device_type().unwrap().as_str()
        );
    }
}
